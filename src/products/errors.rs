//! Product errors.

use std::error::Error as StdError;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("product name must not be blank")]
    BlankName,

    #[error("invalid price value: {0}")]
    NegativePrice(Decimal),

    #[error("unknown product category `{0}`")]
    UnknownCategory(String),

    #[error("unknown sort order `{0}`")]
    UnknownSort(String),

    #[error("catalog storage error")]
    Backend(#[source] Box<dyn StdError + Send + Sync>),
}
