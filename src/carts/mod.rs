//! Carts
//!
//! A signed-in user's cart is a set of rows in a remote store, one per
//! product. [`CartAggregate`] keeps an in-memory [`Projection`] of those rows
//! and re-reads the whole set after every successful write.

pub mod aggregate;
pub mod errors;
pub mod memory;
pub mod models;
pub mod projection;
pub mod store;

pub use aggregate::{CartAggregate, Refresh};
pub use errors::{CartError, StoreError};
pub use memory::MemoryCartStore;
pub use models::{CartItem, CartItemUuid, NewCartItem, ProductSnapshot};
pub use projection::Projection;
pub use store::*;
