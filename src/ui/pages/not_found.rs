//! Not found page component
//!
//! A 404 page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        // Report the status to the server response
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - WrapJoy" />

        <div class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <A href="/" attr:class="btn btn-primary">
                "Back to the Shop"
            </A>
        </div>
    }
}
