//! Built-in catalog rendered into the storefront
//!
//! Server rendering and hydration both read this table so the markup they produce matches.

/// A wrapping paper shown in the product grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub image: &'static str,
    pub description: &'static str,
}

impl CatalogItem {
    /// Price as written into the button's `data-price` attribute.
    pub fn price_attr(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// A selling point shown in the features section.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRODUCTS: &[CatalogItem] = &[
    CatalogItem {
        id: "1",
        name: "Holiday Sparkle",
        price: 12.99,
        image: "/images/holiday-sparkle.svg",
        description: "Metallic snowflakes on deep green, for gifts that glitter.",
    },
    CatalogItem {
        id: "2",
        name: "Birthday Confetti",
        price: 9.99,
        image: "/images/birthday-confetti.svg",
        description: "Bright confetti dots that make any box a party.",
    },
    CatalogItem {
        id: "3",
        name: "Kraft Classic",
        price: 7.49,
        image: "/images/kraft-classic.svg",
        description: "Recycled brown kraft with a natural, rustic finish.",
    },
    CatalogItem {
        id: "4",
        name: "Floral Elegance",
        price: 14.5,
        image: "/images/floral-elegance.svg",
        description: "Watercolor blooms on heavyweight cream stock.",
    },
    CatalogItem {
        id: "5",
        name: "Starry Night",
        price: 11.25,
        image: "/images/starry-night.svg",
        description: "Gold foil stars scattered across midnight blue.",
    },
    CatalogItem {
        id: "6",
        name: "Candy Stripes",
        price: 8.75,
        image: "/images/candy-stripes.svg",
        description: "Playful red and white stripes, tear resistant.",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Eco-Friendly",
        description: "Every roll is printed with soy inks on recyclable paper.",
    },
    Feature {
        title: "Premium Quality",
        description: "Thick stock that folds crisply and never tears at the corners.",
    },
    Feature {
        title: "Fast Shipping",
        description: "Orders leave our studio within two business days.",
    },
    Feature {
        title: "Gift Ready",
        description: "Matching ribbons and tags available for every design.",
    },
];

pub fn find_product(id: &str) -> Option<&'static CatalogItem> {
    PRODUCTS.iter().find(|item| item.id == id)
}
