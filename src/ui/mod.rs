#[cfg(feature = "hydrate")]
pub mod dom_view;
#[cfg(feature = "hydrate")]
pub mod interactions;
pub mod pages;

pub use pages::{NotFoundPage, StorefrontPage};
