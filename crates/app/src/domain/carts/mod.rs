//! Carts

pub mod errors;
mod records;
mod repository;
pub mod store;

pub use store::PgCartStore;
