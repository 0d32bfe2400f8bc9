//! Checkout
//!
//! There is no payment step: a checkout records what was in the cart and
//! empties it.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CheckoutError;
pub use models::{DeliveryDetails, OrderConfirmation};
pub use service::checkout;
