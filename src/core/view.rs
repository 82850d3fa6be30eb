//! The page surface the storefront controller drives
//!
//! `PageView` is implemented over the real DOM in the browser bundle and by a recording fake
//! in tests. Elements are addressed by role rather than by selector.

use std::time::Duration;

use crate::core::navigation::Section;

/// Class toggled on the menu, toggle, hamburger, modal and current nav link.
pub const ACTIVE_CLASS: &str = "active";
/// Class applied to the cart icon while it pulses.
pub const PULSE_CLASS: &str = "pulse";
/// Class applied to an "add to cart" button right after a click.
pub const ADDED_CLASS: &str = "added";
/// Class that starts an entrance animation.
pub const ANIMATE_CLASS: &str = "animate";

/// Elements the controller reads or mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageElement {
    NavMenu,
    MenuToggle,
    Hamburger,
    /// The wrapper around the cart count, which carries the pulse
    CartIcon,
    CartCount,
    CartModal,
    ModalName,
    ModalPrice,
    ModalImage,
    ModalCartCount,
    FooterYear,
    /// n-th `.nav-link` in document order
    NavLink(usize),
    /// n-th "add to cart" button in document order
    AddToCart(usize),
    /// n-th element watched for entrance animation
    Animated(usize),
}

/// Forms present on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Newsletter,
    Contact,
}

/// Text fields the controller reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    NewsletterEmail,
    ContactName,
    ContactEmail,
    ContactMessage,
}

/// Work scheduled to run after a delay. Scheduled actions are never cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    RemoveClass {
        element: PageElement,
        class: &'static str,
    },
}

pub trait PageView {
    fn set_class(&self, element: PageElement, class: &str, enabled: bool);

    fn set_text(&self, element: PageElement, text: &str);

    fn set_image(&self, element: PageElement, src: &str, alt: &str);

    /// Lock or restore scrolling of the page behind an open dialog.
    fn set_scroll_locked(&self, locked: bool);

    /// Smooth-scroll the window so its top sits at `top`.
    fn scroll_to(&self, top: f64);

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Document offset of the element with the given id, if one exists.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Page sections in document order.
    fn sections(&self) -> Vec<Section>;

    /// `href` of every nav link, indexed like [`PageElement::NavLink`].
    fn nav_link_hrefs(&self) -> Vec<Option<String>>;

    fn field_value(&self, field: FormField) -> String;

    fn clear_field(&self, field: FormField);

    fn reset_form(&self, form: Form);

    /// Run `action` once `after` has elapsed.
    fn defer(&self, after: Duration, action: DeferredAction);

    /// Show a message the visitor has to acknowledge.
    fn alert(&self, message: &str);

    fn current_year(&self) -> i32;

    fn inject_styles(&self, css: &str);
}

/// Apply a deferred action to a view. Views call this when a scheduled delay elapses.
pub fn run_deferred<V: PageView + ?Sized>(view: &V, action: &DeferredAction) {
    match action {
        DeferredAction::RemoveClass { element, class } => view.set_class(*element, class, false),
    }
}
