#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet};
    use std::time::Duration;

    use crate::core::{
        AnchorOutcome, DeferredAction, Form, FormError, FormField, PageElement, PageView, Product,
        Section, StorefrontController, run_deferred,
    };

    /// Recording page double with a virtual clock for deferred actions.
    #[derive(Default)]
    struct FakeView {
        classes: RefCell<HashSet<(PageElement, String)>>,
        texts: RefCell<HashMap<PageElement, String>>,
        images: RefCell<HashMap<PageElement, (String, String)>>,
        scroll_locked: Cell<bool>,
        scroll_y: Cell<f64>,
        scrolls: RefCell<Vec<f64>>,
        targets: HashMap<String, f64>,
        sections: Vec<Section>,
        nav_links: Vec<Option<String>>,
        fields: RefCell<HashMap<FormField, String>>,
        alerts: RefCell<Vec<String>>,
        styles: RefCell<Vec<String>>,
        now: Cell<Duration>,
        pending: RefCell<Vec<(Duration, DeferredAction)>>,
    }

    impl FakeView {
        fn storefront() -> Self {
            let sections = vec![
                Section::new("home", 0.0),
                Section::new("products", 700.0),
                Section::new("features", 1500.0),
                Section::new("contact", 2200.0),
            ];
            let targets = sections
                .iter()
                .filter_map(|s| s.id.clone().map(|id| (id, s.top)))
                .collect();
            let nav_links = ["#home", "#products", "#features", "#contact"]
                .into_iter()
                .map(|href| Some(href.to_string()))
                .collect();

            Self {
                targets,
                sections,
                nav_links,
                ..Self::default()
            }
        }

        fn has_class(&self, element: PageElement, class: &str) -> bool {
            self.classes
                .borrow()
                .contains(&(element, class.to_string()))
        }

        fn text(&self, element: PageElement) -> Option<String> {
            self.texts.borrow().get(&element).cloned()
        }

        fn set_field(&self, field: FormField, value: &str) {
            self.fields.borrow_mut().insert(field, value.to_string());
        }

        fn last_alert(&self) -> Option<String> {
            self.alerts.borrow().last().cloned()
        }

        fn active_links(&self) -> Vec<usize> {
            (0..self.nav_links.len())
                .filter(|i| self.has_class(PageElement::NavLink(*i), "active"))
                .collect()
        }

        /// Move the virtual clock forward, running every action that falls due.
        fn advance(&self, by: Duration) {
            let now = self.now.get() + by;
            self.now.set(now);

            let due: Vec<DeferredAction> = {
                let mut pending = self.pending.borrow_mut();
                let (due, later): (Vec<_>, Vec<_>) =
                    pending.drain(..).partition(|(at, _)| *at <= now);
                *pending = later;
                due.into_iter().map(|(_, action)| action).collect()
            };
            for action in &due {
                run_deferred(self, action);
            }
        }
    }

    impl PageView for FakeView {
        fn set_class(&self, element: PageElement, class: &str, enabled: bool) {
            let key = (element, class.to_string());
            let mut classes = self.classes.borrow_mut();
            if enabled {
                classes.insert(key);
            } else {
                classes.remove(&key);
            }
        }

        fn set_text(&self, element: PageElement, text: &str) {
            self.texts.borrow_mut().insert(element, text.to_string());
        }

        fn set_image(&self, element: PageElement, src: &str, alt: &str) {
            self.images
                .borrow_mut()
                .insert(element, (src.to_string(), alt.to_string()));
        }

        fn set_scroll_locked(&self, locked: bool) {
            self.scroll_locked.set(locked);
        }

        fn scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }

        fn scroll_offset(&self) -> f64 {
            self.scroll_y.get()
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.targets.get(id).copied()
        }

        fn sections(&self) -> Vec<Section> {
            self.sections.clone()
        }

        fn nav_link_hrefs(&self) -> Vec<Option<String>> {
            self.nav_links.clone()
        }

        fn field_value(&self, field: FormField) -> String {
            self.fields.borrow().get(&field).cloned().unwrap_or_default()
        }

        fn clear_field(&self, field: FormField) {
            self.fields.borrow_mut().insert(field, String::new());
        }

        fn reset_form(&self, form: Form) {
            let fields: &[FormField] = match form {
                Form::Newsletter => &[FormField::NewsletterEmail],
                Form::Contact => &[
                    FormField::ContactName,
                    FormField::ContactEmail,
                    FormField::ContactMessage,
                ],
            };
            for field in fields {
                self.clear_field(*field);
            }
        }

        fn defer(&self, after: Duration, action: DeferredAction) {
            let at = self.now.get() + after;
            self.pending.borrow_mut().push((at, action));
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn current_year(&self) -> i32 {
            2026
        }

        fn inject_styles(&self, css: &str) {
            self.styles.borrow_mut().push(css.to_string());
        }
    }

    fn holiday() -> Product {
        Product::new("1", "Holiday Sparkle", 12.99, "/images/holiday-sparkle.svg")
    }

    fn kraft() -> Product {
        Product::new("3", "Kraft Classic", 7.49, "/images/kraft-classic.svg")
    }

    // ========================================================================
    // Page chrome
    // ========================================================================

    #[test]
    fn test_init_sets_year_styles_and_zero_count() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();

        controller.init(&view);

        assert_eq!(view.text(PageElement::FooterYear).as_deref(), Some("2026"));
        assert_eq!(view.text(PageElement::CartCount).as_deref(), Some("0"));
        assert_eq!(view.styles.borrow().len(), 1);
        assert!(view.styles.borrow()[0].contains("@keyframes pulse"));
        assert!(view.has_class(PageElement::CartIcon, "pulse"));

        view.advance(Duration::from_millis(300));
        assert!(!view.has_class(PageElement::CartIcon, "pulse"));
    }

    // ========================================================================
    // Mobile menu
    // ========================================================================

    #[test]
    fn test_menu_toggle_keeps_parts_in_lockstep() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();
        let parts = [
            PageElement::NavMenu,
            PageElement::MenuToggle,
            PageElement::Hamburger,
        ];

        controller.toggle_menu(&view);
        assert!(controller.menu().is_open());
        assert!(parts.iter().all(|p| view.has_class(*p, "active")));

        controller.toggle_menu(&view);
        assert!(!controller.menu().is_open());
        assert!(parts.iter().all(|p| !view.has_class(*p, "active")));
    }

    #[test]
    fn test_nav_link_click_closes_menu_idempotently() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();

        controller.toggle_menu(&view);
        controller.close_menu(&view);
        controller.close_menu(&view);

        assert!(!controller.menu().is_open());
        assert!(!view.has_class(PageElement::NavMenu, "active"));
        assert!(!view.has_class(PageElement::Hamburger, "active"));
    }

    // ========================================================================
    // Anchor scrolling
    // ========================================================================

    #[test]
    fn test_anchor_scrolls_below_header_and_closes_menu() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();
        controller.toggle_menu(&view);

        let outcome = controller.anchor_click(&view, "#products");

        assert_eq!(outcome, AnchorOutcome::Scrolled { top: 620.0 });
        assert!(outcome.prevents_default());
        assert_eq!(*view.scrolls.borrow(), vec![620.0]);
        assert!(!controller.menu().is_open());
        assert!(!view.has_class(PageElement::MenuToggle, "active"));
    }

    #[test]
    fn test_anchor_root_fragment_does_nothing() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();
        controller.toggle_menu(&view);

        let outcome = controller.anchor_click(&view, "#");

        assert_eq!(outcome, AnchorOutcome::Root);
        assert!(outcome.prevents_default());
        assert!(view.scrolls.borrow().is_empty());
        assert!(controller.menu().is_open());
    }

    #[test]
    fn test_anchor_missing_target_is_silent() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();
        controller.toggle_menu(&view);

        let outcome = controller.anchor_click(&view, "#does-not-exist");

        assert_eq!(outcome, AnchorOutcome::MissingTarget);
        assert!(outcome.prevents_default());
        assert!(view.scrolls.borrow().is_empty());
        assert!(view.alerts.borrow().is_empty());
        // The anchor handler only closes the menu when it scrolls
        assert!(controller.menu().is_open());
    }

    #[test]
    fn test_non_fragment_link_is_left_alone() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();

        let outcome = controller.anchor_click(&view, "/terms");

        assert_eq!(outcome, AnchorOutcome::NotFragment);
        assert!(!outcome.prevents_default());
    }

    // ========================================================================
    // Scroll highlighting
    // ========================================================================

    #[test]
    fn test_scroll_past_last_section_highlights_only_last_link() {
        let view = FakeView::storefront();
        let controller = StorefrontController::new();

        view.scroll_y.set(2150.0);
        let current = controller.on_scroll(&view);

        assert_eq!(current.as_deref(), Some("contact"));
        assert_eq!(view.active_links(), vec![3]);
    }

    #[test]
    fn test_scroll_moves_highlight_between_links() {
        let view = FakeView::storefront();
        let controller = StorefrontController::new();

        view.scroll_y.set(650.0);
        controller.on_scroll(&view);
        assert_eq!(view.active_links(), vec![1]);

        view.scroll_y.set(100.0);
        controller.on_scroll(&view);
        assert_eq!(view.active_links(), vec![0]);
    }

    #[test]
    fn test_scroll_above_first_threshold_highlights_nothing() {
        let mut view = FakeView::storefront();
        view.sections = vec![Section::new("products", 700.0), Section::new("contact", 2200.0)];
        let controller = StorefrontController::new();

        view.scroll_y.set(2200.0);
        controller.on_scroll(&view);
        assert_eq!(view.active_links(), vec![3]);

        view.scroll_y.set(0.0);
        let current = controller.on_scroll(&view);
        assert_eq!(current, None);
        assert!(view.active_links().is_empty());
    }

    // ========================================================================
    // Entrance animations
    // ========================================================================

    #[test]
    fn test_visibility_marks_animate_once_and_keeps_it() {
        let view = FakeView::storefront();
        let controller = StorefrontController::new();

        controller.on_visibility(&view, 2, false);
        assert!(!view.has_class(PageElement::Animated(2), "animate"));

        controller.on_visibility(&view, 2, true);
        assert!(view.has_class(PageElement::Animated(2), "animate"));

        controller.on_visibility(&view, 2, false);
        controller.on_visibility(&view, 2, true);
        assert!(view.has_class(PageElement::Animated(2), "animate"));
        assert!(!view.has_class(PageElement::Animated(1), "animate"));
    }

    // ========================================================================
    // Cart and modal
    // ========================================================================

    #[test]
    fn test_add_to_cart_populates_modal() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();

        controller.add_to_cart(&view, 0, &holiday());

        assert!(controller.is_modal_open());
        assert!(view.has_class(PageElement::CartModal, "active"));
        assert!(view.scroll_locked.get());
        assert_eq!(view.text(PageElement::ModalName).as_deref(), Some("Holiday Sparkle"));
        assert_eq!(view.text(PageElement::ModalPrice).as_deref(), Some("$12.99"));
        assert_eq!(view.text(PageElement::ModalCartCount).as_deref(), Some("1"));
        assert_eq!(view.text(PageElement::CartCount).as_deref(), Some("1"));
        assert_eq!(
            view.images.borrow().get(&PageElement::ModalImage).cloned(),
            Some((
                "/images/holiday-sparkle.svg".to_string(),
                "Holiday Sparkle".to_string()
            ))
        );
    }

    #[test]
    fn test_modal_shows_aggregate_count_not_line_quantity() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();

        controller.add_to_cart(&view, 2, &kraft());
        controller.add_to_cart(&view, 0, &holiday());
        let outcome = controller.add_to_cart(&view, 0, &holiday());

        assert_eq!(outcome.line_quantity, 2);
        assert_eq!(outcome.count, 3);
        assert_eq!(view.text(PageElement::ModalCartCount).as_deref(), Some("3"));
        assert_eq!(controller.cart().lines().len(), 2);
    }

    #[test]
    fn test_same_product_twice_shows_two() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();

        controller.add_to_cart(&view, 0, &holiday());
        controller.add_to_cart(&view, 0, &holiday());

        assert_eq!(view.text(PageElement::ModalCartCount).as_deref(), Some("2"));
        assert_eq!(controller.cart().count(), 2);
        assert_eq!(controller.cart().lines().len(), 1);
    }

    #[test]
    fn test_transient_states_revert_on_their_own_schedule() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();
        let button = PageElement::AddToCart(0);

        controller.add_to_cart(&view, 0, &holiday());
        assert!(view.has_class(button, "added"));
        assert!(view.has_class(PageElement::CartIcon, "pulse"));

        view.advance(Duration::from_millis(200));
        // Second add before either timer fires; nothing is cancelled
        controller.add_to_cart(&view, 0, &holiday());

        view.advance(Duration::from_millis(100));
        // First pulse timer (t=300) fired even though a second pulse is pending
        assert!(!view.has_class(PageElement::CartIcon, "pulse"));
        assert!(view.has_class(button, "added"));

        view.advance(Duration::from_millis(200));
        // First "added" timer (t=500) fired
        assert!(!view.has_class(button, "added"));
        assert_eq!(view.pending.borrow().len(), 1);

        view.advance(Duration::from_millis(200));
        assert!(view.pending.borrow().is_empty());
    }

    #[test]
    fn test_closing_modal_leaves_cart_untouched() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();

        controller.add_to_cart(&view, 0, &holiday());
        controller.add_to_cart(&view, 2, &kraft());
        let before = controller.cart().clone();

        // Close button
        controller.close_modal(&view);
        assert!(!controller.is_modal_open());
        assert!(!view.scroll_locked.get());
        assert_eq!(controller.cart(), &before);

        // Continue shopping
        controller.add_to_cart(&view, 0, &holiday());
        let before = controller.cart().clone();
        controller.close_modal(&view);
        assert_eq!(controller.cart(), &before);

        // Backdrop
        controller.add_to_cart(&view, 2, &kraft());
        let before = controller.cart().clone();
        controller.modal_click(&view, true);
        assert!(!controller.is_modal_open());
        assert!(!view.has_class(PageElement::CartModal, "active"));
        assert_eq!(controller.cart(), &before);
    }

    #[test]
    fn test_click_inside_modal_content_keeps_it_open() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();

        controller.add_to_cart(&view, 0, &holiday());
        controller.modal_click(&view, false);

        assert!(controller.is_modal_open());
        assert!(view.scroll_locked.get());
    }

    #[test]
    fn test_view_cart_summarizes_and_scrolls_top() {
        let view = FakeView::storefront();
        let mut controller = StorefrontController::new();

        controller.add_to_cart(&view, 0, &holiday());
        controller.add_to_cart(&view, 2, &kraft());
        controller.view_cart(&view);

        assert!(!controller.is_modal_open());
        let alert = view.last_alert().unwrap();
        assert!(alert.starts_with("Your cart has 2 items.\nTotal: $20.48"));
        assert_eq!(view.scrolls.borrow().last().copied(), Some(0.0));
        assert_eq!(controller.cart().count(), 2);
    }

    // ========================================================================
    // Forms
    // ========================================================================

    #[test]
    fn test_newsletter_rejects_without_at_sign() {
        let view = FakeView::storefront();
        let controller = StorefrontController::new();
        view.set_field(FormField::NewsletterEmail, "not-an-email");

        let result = controller.submit_newsletter(&view);

        assert_eq!(result, Err(FormError::InvalidEmail));
        assert_eq!(
            view.last_alert().as_deref(),
            Some("Please enter a valid email address.")
        );
        assert_eq!(view.field_value(FormField::NewsletterEmail), "not-an-email");
    }

    #[test]
    fn test_newsletter_accepts_and_clears() {
        let view = FakeView::storefront();
        let controller = StorefrontController::new();
        view.set_field(FormField::NewsletterEmail, "a@b");

        let result = controller.submit_newsletter(&view);

        assert_eq!(result, Ok(()));
        assert_eq!(
            view.last_alert().as_deref(),
            Some("Thank you for subscribing to our newsletter!")
        );
        assert_eq!(view.field_value(FormField::NewsletterEmail), "");
    }

    #[test]
    fn test_contact_rejects_empty_message() {
        let view = FakeView::storefront();
        let controller = StorefrontController::new();
        view.set_field(FormField::ContactName, "Ada");
        view.set_field(FormField::ContactEmail, "ada@example.com");

        let result = controller.submit_contact(&view);

        assert_eq!(result, Err(FormError::MissingFields));
        assert_eq!(
            view.last_alert().as_deref(),
            Some("Please fill in all fields before submitting.")
        );
        assert_eq!(view.field_value(FormField::ContactName), "Ada");
    }

    #[test]
    fn test_contact_accepts_and_resets() {
        let view = FakeView::storefront();
        let controller = StorefrontController::new();
        view.set_field(FormField::ContactName, "Ada");
        view.set_field(FormField::ContactEmail, "ada@example.com");
        view.set_field(FormField::ContactMessage, "Do you ship abroad?");

        let result = controller.submit_contact(&view);

        assert_eq!(result, Ok(()));
        assert_eq!(
            view.last_alert().as_deref(),
            Some("Thank you for your message, Ada! We'll get back to you soon.")
        );
        for field in [
            FormField::ContactName,
            FormField::ContactEmail,
            FormField::ContactMessage,
        ] {
            assert_eq!(view.field_value(field), "");
        }
    }
}
