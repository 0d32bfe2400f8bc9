//! Cart errors.

use std::error::Error as StdError;

use thiserror::Error;

/// Failure reported by a [`CartStore`](crate::carts::CartStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product does not exist")]
    UnknownProduct,

    #[error("invalid cart row: {0}")]
    InvalidRow(String),

    #[error("cart storage error")]
    Backend(#[source] Box<dyn StdError + Send + Sync>),
}

impl StoreError {
    /// Wrap an opaque backend failure.
    pub fn backend(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Backend(source.into())
    }
}

/// Failure returned by cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("invalid quantity {0}")]
    InvalidQuantity(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}
