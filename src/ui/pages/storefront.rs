//! Storefront page
//!
//! Static markup for the WrapJoy shop: header with mobile navigation, hero, product grid,
//! features, newsletter signup, contact form, footer and the add-to-cart confirmation
//! dialog. The markup carries no reactive state; interactivity is attached after hydration
//! by [`crate::ui::interactions`].

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::catalog::{CatalogItem, FEATURES, Feature, PRODUCTS};

/// Storefront page component
#[component]
pub fn StorefrontPage() -> impl IntoView {
    view! {
        <Title text="WrapJoy - Gift Wrapping Paper" />
        <Meta
            name="description"
            content="Beautiful gift wrapping paper for every occasion. Eco-friendly, premium quality, shipped fast."
        />

        <Header />

        <main>
            <Hero />
            <Products />
            <Features />
            <Newsletter />
            <Contact />
        </main>

        <Footer />
        <CartModal />
        <StorefrontInteractions />
    }
}

/// Attaches DOM event handlers once the page is hydrated
#[component]
fn StorefrontInteractions() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            if let Err(err) = crate::ui::interactions::install() {
                leptos::logging::error!("storefront wiring failed: {}", err);
            }
        });
    }
}

#[component]
fn Header() -> impl IntoView {
    let links = [
        ("#home", "Home"),
        ("#products", "Products"),
        ("#features", "Why Us"),
        ("#contact", "Contact"),
    ];

    view! {
        <header class="header">
            <nav class="navbar container">
                <a href="#home" class="logo">"WrapJoy"</a>

                <ul class="nav-menu">
                    {links
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <a href=href class="nav-link">{label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="nav-actions">
                    <a href="#products" class="cart-icon" aria-label="Cart">
                        <span class="cart-symbol" aria-hidden="true">"\u{1F6D2}"</span>
                        <span class="cart-count">"0"</span>
                    </a>
                    <button class="menu-toggle" aria-label="Toggle navigation">
                        <span class="hamburger"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container hero-content">
                <h1>"Wrap Every Gift With Joy"</h1>
                <p>"Premium wrapping paper designed to make every present unforgettable."</p>
                <a href="#products" class="btn btn-primary">"Shop Now"</a>
            </div>
        </section>
    }
}

#[component]
fn Products() -> impl IntoView {
    view! {
        <section id="products" class="products">
            <div class="container">
                <h2 class="section-title">"Our Collection"</h2>
                <div class="product-grid">
                    {PRODUCTS.iter().map(|item| view! { <ProductCard item=item /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(item: &'static CatalogItem) -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=item.image alt=item.name loading="lazy" />
            </div>
            <div class="product-info">
                <h3>{item.name}</h3>
                <p class="product-description">{item.description}</p>
                <p class="product-price">{format!("${:.2}", item.price)}</p>
                <button
                    class="btn add-to-cart"
                    data-id=item.id
                    data-name=item.name
                    data-price=item.price_attr()
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <h2 class="section-title">"Why Choose WrapJoy"</h2>
                <div class="feature-grid">
                    {FEATURES.iter().map(|feature| view! { <FeatureBlock feature=feature /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureBlock(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="feature">
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    view! {
        <section id="newsletter" class="newsletter">
            <div class="container">
                <h2>"Join Our Newsletter"</h2>
                <p>"New designs and seasonal offers, straight to your inbox."</p>
                <form class="newsletter-form">
                    <input type="email" placeholder="Your email address" aria-label="Email address" />
                    <button type="submit" class="btn btn-primary">"Subscribe"</button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container contact-layout">
                <div class="contact-info">
                    <h2>"Get In Touch"</h2>
                    <p>"Questions about an order or a custom design? Send us a note."</p>
                </div>
                <form class="contact-form">
                    <input type="text" placeholder="Your name" aria-label="Name" />
                    <input type="email" placeholder="Your email" aria-label="Email" />
                    <textarea rows="5" placeholder="Your message" aria-label="Message"></textarea>
                    <button type="submit" class="btn btn-primary">"Send Message"</button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>
                    "\u{00A9} " <span id="currentYear"></span> " WrapJoy. All rights reserved."
                </p>
            </div>
        </footer>
    }
}

#[component]
fn CartModal() -> impl IntoView {
    view! {
        <div id="cartModal" class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title">
            <div class="modal-content">
                <button class="modal-close" aria-label="Close">"\u{00D7}"</button>
                <h3 id="modal-title">"Added to Cart"</h3>
                <div class="modal-product">
                    <img id="modal-img" src="" alt="" />
                    <div>
                        <p id="modal-name"></p>
                        <p id="modal-price"></p>
                    </div>
                </div>
                <p class="modal-summary">
                    "Items in cart: " <span id="modal-cart-count">"0"</span>
                </p>
                <div class="modal-actions">
                    <button class="btn continue-shopping">"Continue Shopping"</button>
                    <button class="btn btn-primary view-cart">"View Cart"</button>
                </div>
            </div>
        </div>
    }
}
