//! Checkout errors.

use thiserror::Error;

use crate::carts::CartError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("a delivery address is required")]
    MissingAddress,

    #[error("failed to clear cart")]
    Cart(#[from] CartError),
}
