//! Bloom
//!
//! Bloom is the cart and catalog domain of a flower storefront: an in-memory
//! projection of a user's cart kept in step with a remote store, plus the
//! product catalog it snapshots from and a payment-free checkout.

pub mod carts;
pub mod checkout;
pub mod prelude;
pub mod products;
pub mod users;
pub mod uuids;
