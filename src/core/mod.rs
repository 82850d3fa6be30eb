//! Storefront state and interaction logic, independent of the rendering environment

pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
mod cart;
mod controller;
mod forms;
mod navigation;
mod settings;
mod styles;
#[cfg(test)]
mod tests;
mod view;

pub use cart::*;
pub use controller::*;
pub use forms::*;
pub use navigation::*;
pub use settings::*;
pub use styles::*;
pub use view::*;
