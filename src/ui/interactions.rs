//! Binds the storefront controller to DOM events
//!
//! Every listener closure is leaked with `forget()`: the page is static and the
//! bindings live as long as the page view.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::{log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::core::StorefrontController;
use crate::ui::dom_view::{ANCHOR_SELECTOR, DomView, WiringError};

type SharedController = Rc<RefCell<StorefrontController>>;

/// Attach the controller to the current document.
///
/// Fails only when there is no document at all; problems with individual elements are
/// logged and the remaining bindings still go in.
pub fn install() -> Result<(), WiringError> {
    let view = DomView::attach()?;
    let controller: SharedController = Rc::new(RefCell::new(StorefrontController::new()));

    let problems: Vec<WiringError> = [
        bind_navigation(&view, &controller),
        bind_cart(&view, &controller),
        bind_forms(&view, &controller),
        bind_scroll(&view, &controller),
        bind_visibility(&view, &controller),
    ]
    .into_iter()
    .flatten()
    .collect();

    for problem in &problems {
        warn!("storefront wiring: {}", problem);
    }

    controller.borrow_mut().init(&view);
    log!("WrapJoy website loaded successfully!");
    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WiringError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| WiringError::Listener {
            event,
            message: format!("{:?}", err),
        })?;
    closure.forget();
    Ok(())
}

fn require(view: &DomView, selector: &'static str) -> Result<Element, WiringError> {
    view.query(selector)
        .ok_or(WiringError::MissingElement(selector))
}

fn bind_navigation(view: &DomView, controller: &SharedController) -> Vec<WiringError> {
    let mut problems = Vec::new();

    match require(view, ".menu-toggle") {
        Ok(toggle) => {
            let (view, controller) = (view.clone(), controller.clone());
            if let Err(err) = listen(&toggle, "click", move |_| {
                controller.borrow_mut().toggle_menu(&view);
            }) {
                problems.push(err);
            }
        }
        Err(err) => problems.push(err),
    }

    for link in view.nav_links() {
        let (view, controller) = (view.clone(), controller.clone());
        if let Err(err) = listen(link, "click", move |_| {
            controller.borrow_mut().close_menu(&view);
        }) {
            problems.push(err);
        }
    }

    for anchor in view.query_all(ANCHOR_SELECTOR) {
        let href_source = anchor.clone();
        let (view, controller) = (view.clone(), controller.clone());
        if let Err(err) = listen(&anchor, "click", move |ev| {
            let href = href_source.get_attribute("href").unwrap_or_default();
            let outcome = controller.borrow_mut().anchor_click(&view, &href);
            if outcome.prevents_default() {
                ev.prevent_default();
            }
        }) {
            problems.push(err);
        }
    }

    problems
}

fn bind_cart(view: &DomView, controller: &SharedController) -> Vec<WiringError> {
    let mut problems = Vec::new();

    for (index, button) in view.add_buttons().iter().enumerate() {
        let (view, controller) = (view.clone(), controller.clone());
        if let Err(err) = listen(button, "click", move |_| {
            let product = view.product_for(index);
            controller.borrow_mut().add_to_cart(&view, index, &product);
        }) {
            problems.push(err);
        }
    }

    for selector in [".modal-close", ".continue-shopping"] {
        match require(view, selector) {
            Ok(control) => {
                let (view, controller) = (view.clone(), controller.clone());
                if let Err(err) = listen(&control, "click", move |_| {
                    controller.borrow_mut().close_modal(&view);
                }) {
                    problems.push(err);
                }
            }
            Err(err) => problems.push(err),
        }
    }

    match require(view, ".view-cart") {
        Ok(control) => {
            let (view, controller) = (view.clone(), controller.clone());
            if let Err(err) = listen(&control, "click", move |_| {
                controller.borrow_mut().view_cart(&view);
            }) {
                problems.push(err);
            }
        }
        Err(err) => problems.push(err),
    }

    match require(view, "#cartModal") {
        Ok(modal) => {
            let backdrop = modal.clone();
            let (view, controller) = (view.clone(), controller.clone());
            if let Err(err) = listen(&modal, "click", move |ev| {
                let on_backdrop = ev
                    .target()
                    .as_ref()
                    .and_then(|target| target.dyn_ref::<Element>())
                    == Some(&backdrop);
                controller.borrow_mut().modal_click(&view, on_backdrop);
            }) {
                problems.push(err);
            }
        }
        Err(err) => problems.push(err),
    }

    problems
}

fn bind_forms(view: &DomView, controller: &SharedController) -> Vec<WiringError> {
    let mut problems = Vec::new();

    match require(view, ".newsletter-form") {
        Ok(form) => {
            let (view, controller) = (view.clone(), controller.clone());
            if let Err(err) = listen(&form, "submit", move |ev| {
                ev.prevent_default();
                let _ = controller.borrow().submit_newsletter(&view);
            }) {
                problems.push(err);
            }
        }
        Err(err) => problems.push(err),
    }

    match require(view, ".contact-form") {
        Ok(form) => {
            let (view, controller) = (view.clone(), controller.clone());
            if let Err(err) = listen(&form, "submit", move |ev| {
                ev.prevent_default();
                let _ = controller.borrow().submit_contact(&view);
            }) {
                problems.push(err);
            }
        }
        Err(err) => problems.push(err),
    }

    problems
}

fn bind_scroll(view: &DomView, controller: &SharedController) -> Vec<WiringError> {
    let window = view.window().clone();
    let (view, controller) = (view.clone(), controller.clone());
    listen(&window, "scroll", move |_| {
        controller.borrow().on_scroll(&view);
    })
    .err()
    .into_iter()
    .collect()
}

fn bind_visibility(view: &DomView, controller: &SharedController) -> Vec<WiringError> {
    let settings = controller.borrow().settings().clone();

    let callback = {
        let (view, controller) = (view.clone(), controller.clone());
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if let Some(index) = view.animated_index(&entry.target()) {
                        controller
                            .borrow()
                            .on_visibility(&view, index, entry.is_intersecting());
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&settings.visibility_threshold.into());
    options.set_root_margin(&settings.root_margin());

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => return vec![WiringError::Observer(format!("{:?}", err))],
        };

    for element in view.animated() {
        observer.observe(element);
    }
    callback.forget();

    Vec::new()
}
