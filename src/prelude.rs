//! Bloom prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    carts::{
        CartAggregate, CartError, CartItem, CartItemUuid, CartStore, MemoryCartStore,
        NewCartItem, ProductSnapshot, Projection, Refresh, StoreError,
    },
    checkout::{CheckoutError, DeliveryDetails, OrderConfirmation, checkout},
    products::{
        Category, NewProduct, Product, ProductCatalog, ProductError, ProductQuery, ProductSort,
        ProductUuid,
    },
    users::{Session, UserUuid},
};
