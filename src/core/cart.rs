//! Client-side shopping cart
//!
//! The cart lives for a single page view. Lines are keyed by product id and kept in the
//! order they were first added; nothing is ever removed or decremented.

use serde::{Deserialize, Serialize};

/// Product details read from an "add to cart" control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }

    /// Build a product from raw control attributes.
    ///
    /// Attributes are trusted as-is: a missing value becomes an empty string and a price
    /// that does not parse becomes NaN.
    pub fn from_attributes(
        id: Option<String>,
        name: Option<String>,
        price: Option<String>,
        image: Option<String>,
    ) -> Self {
        let price = price
            .as_deref()
            .map(str::trim)
            .and_then(|raw| raw.parse::<f64>().ok())
            .unwrap_or(f64::NAN);

        Self {
            id: id.unwrap_or_default(),
            name: name.unwrap_or_default(),
            price,
            image: image.unwrap_or_default(),
        }
    }
}

/// One distinct product entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Result of a single add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Total units in the cart after the add
    pub count: u32,
    /// Quantity of the affected line after the add
    pub line_quantity: u32,
    /// Whether the add created a new line
    pub new_line: bool,
}

/// Aggregate cart state: the unit count and the ordered line collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    count: u32,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total units added so far.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`.
    pub fn add(&mut self, product: &Product) -> AddOutcome {
        self.count += 1;

        match self.lines.iter_mut().find(|line| line.id == product.id) {
            Some(line) => {
                line.quantity += 1;
                AddOutcome {
                    count: self.count,
                    line_quantity: line.quantity,
                    new_line: false,
                }
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                AddOutcome {
                    count: self.count,
                    line_quantity: 1,
                    new_line: true,
                }
            }
        }
    }

    /// Sum of price times quantity over all lines. Computed on every call.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Text shown by the "view cart" action.
    pub fn summary_message(&self) -> String {
        let plural = if self.count == 1 { "" } else { "s" };
        format!(
            "Your cart has {} item{}.\nTotal: {}\n\nThis is a demo - in a real store, you would proceed to checkout.",
            self.count,
            plural,
            format_price(self.total())
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Format a price with the currency prefix and exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
