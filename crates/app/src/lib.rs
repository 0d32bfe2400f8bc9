//! Postgres persistence for Bloom carts and products.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
