//! Storefront interaction controller
//!
//! Owns every piece of page-session state (cart, mobile menu, modal visibility) and exposes
//! one method per DOM event. All rendering goes through a [`PageView`], so the same logic
//! runs against the browser DOM and against the test fake.

use leptos::logging::{debug_warn, log};

use crate::core::cart::{AddOutcome, Cart, Product, format_price};
use crate::core::forms::{
    ContactSubmission, FormError, NEWSLETTER_THANKS, validate_contact, validate_newsletter,
};
use crate::core::navigation::{Fragment, MenuState, current_section, is_active_link, parse_fragment};
use crate::core::settings::InteractionSettings;
use crate::core::styles::ANIMATION_STYLES;
use crate::core::view::{
    ACTIVE_CLASS, ADDED_CLASS, ANIMATE_CLASS, DeferredAction, Form, FormField, PULSE_CLASS,
    PageElement, PageView,
};

/// What an in-page link click did.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorOutcome {
    /// The bare `#` link; nothing beyond suppressing navigation
    Root,
    /// Scrolled so the target sits below the header
    Scrolled { top: f64 },
    /// No element has the referenced id; nothing happened
    MissingTarget,
    /// Not an in-page link
    NotFragment,
}

impl AnchorOutcome {
    /// Whether the browser's default navigation must be suppressed.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, AnchorOutcome::NotFragment)
    }
}

#[derive(Debug, Default)]
pub struct StorefrontController {
    settings: InteractionSettings,
    cart: Cart,
    menu: MenuState,
    modal_open: bool,
}

impl StorefrontController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: InteractionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Page chrome set up once at load.
    pub fn init<V: PageView + ?Sized>(&mut self, view: &V) {
        view.inject_styles(ANIMATION_STYLES);
        view.set_text(PageElement::FooterYear, &view.current_year().to_string());
        self.render_cart_count(view);
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn toggle_menu<V: PageView + ?Sized>(&mut self, view: &V) {
        self.menu.toggle();
        self.render_menu(view);
    }

    /// Nav link click: the menu always ends up closed.
    pub fn close_menu<V: PageView + ?Sized>(&mut self, view: &V) {
        self.menu.close();
        self.render_menu(view);
    }

    fn render_menu<V: PageView + ?Sized>(&self, view: &V) {
        let open = self.menu.is_open();
        for element in [
            PageElement::NavMenu,
            PageElement::MenuToggle,
            PageElement::Hamburger,
        ] {
            view.set_class(element, ACTIVE_CLASS, open);
        }
    }

    pub fn anchor_click<V: PageView + ?Sized>(&mut self, view: &V, href: &str) -> AnchorOutcome {
        let id = match parse_fragment(href) {
            None => return AnchorOutcome::NotFragment,
            Some(Fragment::Root) => return AnchorOutcome::Root,
            Some(Fragment::Target(id)) => id,
        };

        let Some(element_top) = view.element_top(id) else {
            debug_warn!("no element matches anchor target #{}", id);
            return AnchorOutcome::MissingTarget;
        };

        self.close_menu(view);
        let top = element_top - self.settings.header_offset;
        view.scroll_to(top);
        AnchorOutcome::Scrolled { top }
    }

    /// Recompute the highlighted nav link. Returns the current section id.
    pub fn on_scroll<V: PageView + ?Sized>(&self, view: &V) -> Option<String> {
        let sections = view.sections();
        let current = current_section(
            view.scroll_offset(),
            &sections,
            self.settings.activation_offset,
        );

        for (index, href) in view.nav_link_hrefs().iter().enumerate() {
            view.set_class(
                PageElement::NavLink(index),
                ACTIVE_CLASS,
                is_active_link(href.as_deref(), current),
            );
        }

        current.map(str::to_string)
    }

    /// Visibility observer callback for the n-th watched element.
    pub fn on_visibility<V: PageView + ?Sized>(&self, view: &V, index: usize, intersecting: bool) {
        if intersecting {
            view.set_class(PageElement::Animated(index), ANIMATE_CLASS, true);
        }
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    pub fn add_to_cart<V: PageView + ?Sized>(
        &mut self,
        view: &V,
        button: usize,
        product: &Product,
    ) -> AddOutcome {
        let outcome = self.cart.add(product);
        self.render_cart_count(view);

        if cfg!(debug_assertions) {
            if let Ok(snapshot) = self.cart.to_json() {
                log!("cart: {}", snapshot);
            }
        }

        self.open_modal(view, product);

        let element = PageElement::AddToCart(button);
        view.set_class(element, ADDED_CLASS, true);
        view.defer(
            self.settings.added_duration,
            DeferredAction::RemoveClass {
                element,
                class: ADDED_CLASS,
            },
        );

        outcome
    }

    fn render_cart_count<V: PageView + ?Sized>(&self, view: &V) {
        view.set_text(PageElement::CartCount, &self.cart.count().to_string());

        view.set_class(PageElement::CartIcon, PULSE_CLASS, true);
        view.defer(
            self.settings.pulse_duration,
            DeferredAction::RemoveClass {
                element: PageElement::CartIcon,
                class: PULSE_CLASS,
            },
        );
    }

    fn open_modal<V: PageView + ?Sized>(&mut self, view: &V, product: &Product) {
        view.set_text(PageElement::ModalName, &product.name);
        view.set_text(PageElement::ModalPrice, &format_price(product.price));
        view.set_image(PageElement::ModalImage, &product.image, &product.name);
        view.set_text(PageElement::ModalCartCount, &self.cart.count().to_string());

        view.set_class(PageElement::CartModal, ACTIVE_CLASS, true);
        view.set_scroll_locked(true);
        self.modal_open = true;
    }

    /// Close button, "continue shopping" and backdrop clicks.
    pub fn close_modal<V: PageView + ?Sized>(&mut self, view: &V) {
        view.set_class(PageElement::CartModal, ACTIVE_CLASS, false);
        view.set_scroll_locked(false);
        self.modal_open = false;
    }

    /// Click anywhere on the modal overlay. Only clicks on the backdrop itself close it.
    pub fn modal_click<V: PageView + ?Sized>(&mut self, view: &V, on_backdrop: bool) {
        if on_backdrop {
            self.close_modal(view);
        }
    }

    /// Stand-in for checkout: summarize the cart and return to the top of the page.
    pub fn view_cart<V: PageView + ?Sized>(&mut self, view: &V) {
        self.close_modal(view);
        view.alert(&self.cart.summary_message());
        view.scroll_to(0.0);
    }

    // ------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------

    pub fn submit_newsletter<V: PageView + ?Sized>(&self, view: &V) -> Result<(), FormError> {
        let email = view.field_value(FormField::NewsletterEmail);

        match validate_newsletter(&email) {
            Ok(()) => {
                view.alert(NEWSLETTER_THANKS);
                view.clear_field(FormField::NewsletterEmail);
                Ok(())
            }
            Err(err) => {
                view.alert(&err.to_string());
                Err(err)
            }
        }
    }

    pub fn submit_contact<V: PageView + ?Sized>(&self, view: &V) -> Result<(), FormError> {
        let submission = ContactSubmission {
            name: view.field_value(FormField::ContactName),
            email: view.field_value(FormField::ContactEmail),
            message: view.field_value(FormField::ContactMessage),
        };

        match validate_contact(&submission) {
            Ok(()) => {
                view.alert(&submission.thanks());
                view.reset_form(Form::Contact);
                Ok(())
            }
            Err(err) => {
                view.alert(&err.to_string());
                Err(err)
            }
        }
    }
}
