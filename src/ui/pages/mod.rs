//! Application pages module
//!
//! - Storefront (home)
//! - Not found

mod not_found;
mod storefront;

pub use not_found::NotFoundPage;
pub use storefront::StorefrontPage;
