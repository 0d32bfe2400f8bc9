//! Products

pub mod catalog;
pub mod errors;
mod records;
mod repository;

pub use catalog::PgProductCatalog;
