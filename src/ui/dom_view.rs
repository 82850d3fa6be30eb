//! `PageView` over the browser DOM
//!
//! Element lists (nav links, cart buttons, animated blocks) are captured once when the view
//! attaches; indices into them are the indices used by [`PageElement`].

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::core::{
    DeferredAction, Form, FormField, PageElement, PageView, Product, Section, run_deferred,
};

/// Errors raised while binding the controller to the document.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("failed to register {event} listener: {message}")]
    Listener {
        event: &'static str,
        message: String,
    },

    #[error("visibility observer unavailable: {0}")]
    Observer(String),
}

pub(crate) const NAV_LINK_SELECTOR: &str = ".nav-link";
pub(crate) const ADD_TO_CART_SELECTOR: &str = ".add-to-cart";
pub(crate) const ANIMATED_SELECTOR: &str = ".product-card, .feature, .contact-form";
pub(crate) const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

struct DomNodes {
    window: Window,
    document: Document,
    nav_links: Vec<Element>,
    add_buttons: Vec<Element>,
    animated: Vec<Element>,
}

#[derive(Clone)]
pub struct DomView {
    nodes: Rc<DomNodes>,
}

impl DomView {
    pub fn attach() -> Result<Self, WiringError> {
        let window = web_sys::window().ok_or(WiringError::NoWindow)?;
        let document = window.document().ok_or(WiringError::NoDocument)?;

        let nav_links = query_all(&document, NAV_LINK_SELECTOR);
        let add_buttons = query_all(&document, ADD_TO_CART_SELECTOR);
        let animated = query_all(&document, ANIMATED_SELECTOR);

        Ok(Self {
            nodes: Rc::new(DomNodes {
                window,
                document,
                nav_links,
                add_buttons,
                animated,
            }),
        })
    }

    pub fn window(&self) -> &Window {
        &self.nodes.window
    }

    pub fn document(&self) -> &Document {
        &self.nodes.document
    }

    pub fn nav_links(&self) -> &[Element] {
        &self.nodes.nav_links
    }

    pub fn add_buttons(&self) -> &[Element] {
        &self.nodes.add_buttons
    }

    pub fn animated(&self) -> &[Element] {
        &self.nodes.animated
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document().query_selector(selector).ok().flatten()
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        query_all(self.document(), selector)
    }

    /// Index of `target` among the animated elements.
    pub fn animated_index(&self, target: &Element) -> Option<usize> {
        self.animated().iter().position(|el| el == target)
    }

    /// Read the product a cart button describes. Attributes are taken at face value.
    pub fn product_for(&self, button: usize) -> Product {
        let Some(el) = self.add_buttons().get(button) else {
            return Product::from_attributes(None, None, None, None);
        };

        let image = el
            .closest(".product-card")
            .ok()
            .flatten()
            .and_then(|card| card.query_selector("img").ok().flatten())
            .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
            .map(|img| img.src());

        Product::from_attributes(
            el.get_attribute("data-id"),
            el.get_attribute("data-name"),
            el.get_attribute("data-price"),
            image,
        )
    }

    fn element(&self, element: PageElement) -> Option<Element> {
        let doc = self.document();
        match element {
            PageElement::NavMenu => self.query(".nav-menu"),
            PageElement::MenuToggle => self.query(".menu-toggle"),
            PageElement::Hamburger => self.query(".hamburger"),
            PageElement::CartCount => self.query(".cart-count"),
            PageElement::CartIcon => self
                .query(".cart-count")
                .and_then(|count| count.parent_element()),
            PageElement::CartModal => doc.get_element_by_id("cartModal"),
            PageElement::ModalName => doc.get_element_by_id("modal-name"),
            PageElement::ModalPrice => doc.get_element_by_id("modal-price"),
            PageElement::ModalImage => doc.get_element_by_id("modal-img"),
            PageElement::ModalCartCount => doc.get_element_by_id("modal-cart-count"),
            PageElement::FooterYear => doc.get_element_by_id("currentYear"),
            PageElement::NavLink(i) => self.nav_links().get(i).cloned(),
            PageElement::AddToCart(i) => self.add_buttons().get(i).cloned(),
            PageElement::Animated(i) => self.animated().get(i).cloned(),
        }
    }

    fn field(&self, field: FormField) -> Option<Element> {
        let selector = match field {
            FormField::NewsletterEmail => ".newsletter-form input[type=\"email\"]",
            FormField::ContactName => ".contact-form input[type=\"text\"]",
            FormField::ContactEmail => ".contact-form input[type=\"email\"]",
            FormField::ContactMessage => ".contact-form textarea",
        };
        self.query(selector)
    }
}

impl PageView for DomView {
    fn set_class(&self, element: PageElement, class: &str, enabled: bool) {
        if let Some(el) = self.element(element) {
            let _ = el.class_list().toggle_with_force(class, enabled);
        }
    }

    fn set_text(&self, element: PageElement, text: &str) {
        if let Some(el) = self.element(element) {
            el.set_text_content(Some(text));
        }
    }

    fn set_image(&self, element: PageElement, src: &str, alt: &str) {
        if let Some(img) = self
            .element(element)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            img.set_src(src);
            img.set_alt(alt);
        }
    }

    fn set_scroll_locked(&self, locked: bool) {
        if let Some(body) = self.document().body() {
            let overflow = if locked { "hidden" } else { "auto" };
            let _ = body.style().set_property("overflow", overflow);
        }
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window().scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_offset(&self) -> f64 {
        self.window().scroll_y().unwrap_or(0.0)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.document()
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| f64::from(el.offset_top()))
    }

    fn sections(&self) -> Vec<Section> {
        self.query_all("section")
            .into_iter()
            .map(|el| Section {
                id: el.get_attribute("id"),
                top: el
                    .dyn_ref::<HtmlElement>()
                    .map(|el| f64::from(el.offset_top()))
                    .unwrap_or(0.0),
            })
            .collect()
    }

    fn nav_link_hrefs(&self) -> Vec<Option<String>> {
        self.nav_links()
            .iter()
            .map(|link| link.get_attribute("href"))
            .collect()
    }

    fn field_value(&self, field: FormField) -> String {
        let Some(el) = self.field(field) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn clear_field(&self, field: FormField) {
        let Some(el) = self.field(field) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value("");
        }
    }

    fn reset_form(&self, form: Form) {
        let selector = match form {
            Form::Newsletter => ".newsletter-form",
            Form::Contact => ".contact-form",
        };
        if let Some(form) = self
            .query(selector)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn defer(&self, after: Duration, action: DeferredAction) {
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        let view = self.clone();
        Timeout::new(millis, move || run_deferred(&view, &action)).forget();
    }

    fn alert(&self, message: &str) {
        let _ = self.window().alert_with_message(message);
    }

    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }

    fn inject_styles(&self, css: &str) {
        let doc = self.document();
        let (Ok(style), Some(head)) = (doc.create_element("style"), doc.head()) else {
            return;
        };
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
