//! Products
//!
//! The read-mostly catalog that carts snapshot from.

pub mod catalog;
pub mod errors;
pub mod models;
pub mod query;

pub use catalog::*;
pub use errors::ProductError;
pub use models::{Category, NewProduct, Product, ProductUuid};
pub use query::{ProductQuery, ProductSort};
