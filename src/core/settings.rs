//! Fixed tunables for page interactions

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSettings {
    /// Height of the fixed header; scroll targets land this far below the viewport top
    pub header_offset: f64,
    /// A section becomes current once the scroll offset passes `top - activation_offset`
    pub activation_offset: f64,
    /// How long the cart icon pulses after the count changes
    pub pulse_duration: Duration,
    /// How long an "add to cart" button shows its added state
    pub added_duration: Duration,
    /// Fraction of an element that must be visible before it animates in
    pub visibility_threshold: f64,
    /// Amount the observer viewport is shrunk at the bottom
    pub visibility_bottom_margin: f64,
}

impl InteractionSettings {
    /// Root margin string for the visibility observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.visibility_bottom_margin)
    }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            activation_offset: 100.0,
            pulse_duration: Duration::from_millis(300),
            added_duration: Duration::from_millis(500),
            visibility_threshold: 0.1,
            visibility_bottom_margin: 100.0,
        }
    }
}
