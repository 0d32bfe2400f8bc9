//! Checkout service.

use jiff::Timestamp;
use tracing::info;

use crate::{
    carts::CartAggregate,
    checkout::{
        errors::CheckoutError,
        models::{DeliveryDetails, OrderConfirmation},
    },
};

/// Place an order for everything in `cart`.
///
/// The totals are taken from the cart's current projection, then the cart is
/// cleared whatever it contained.
///
/// # Errors
///
/// - [`CheckoutError::MissingAddress`]: the address is blank; the cart is untouched.
/// - [`CheckoutError::Cart`]: clearing the cart failed, including when nobody is signed in.
pub async fn checkout(
    cart: &CartAggregate,
    delivery: DeliveryDetails,
) -> Result<OrderConfirmation, CheckoutError> {
    if delivery.address.trim().is_empty() {
        return Err(CheckoutError::MissingAddress);
    }

    let projection = cart.projection();

    let confirmation = OrderConfirmation {
        items: projection.total_items(),
        total: projection.total_price(),
        delivery,
        placed_at: Timestamp::now(),
    };

    cart.clear().await?;

    info!(
        items = confirmation.items,
        total = %confirmation.total,
        "placed order"
    );

    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::dec;
    use testresult::TestResult;

    use crate::{
        carts::{CartError, MemoryCartStore, ProductSnapshot},
        products::ProductUuid,
        users::{Session, UserUuid},
    };

    use super::*;

    fn delivery(address: &str) -> DeliveryDetails {
        DeliveryDetails {
            address: address.to_string(),
            ..DeliveryDetails::default()
        }
    }

    #[tokio::test]
    async fn checkout_summarises_and_clears_the_cart() -> TestResult {
        let lily = ProductSnapshot {
            uuid: ProductUuid::new(),
            name: "Lily".to_string(),
            price: dec!(9.50),
            image_url: None,
        };
        let store = Arc::new(MemoryCartStore::with_products([lily.clone()]));
        let cart = CartAggregate::open(store, Session::authenticated(UserUuid::new())).await;

        cart.add(lily.uuid, 2).await?;

        let confirmation = checkout(&cart, delivery("1 Garden Row")).await?;

        assert_eq!(confirmation.items, 2);
        assert_eq!(confirmation.total, dec!(19.00));
        assert!(cart.projection().is_empty());
        assert_eq!(cart.total_price(), dec!(0));

        Ok(())
    }

    #[tokio::test]
    async fn blank_address_leaves_cart_untouched() -> TestResult {
        let lily = ProductSnapshot {
            uuid: ProductUuid::new(),
            name: "Lily".to_string(),
            price: dec!(9.50),
            image_url: None,
        };
        let store = Arc::new(MemoryCartStore::with_products([lily.clone()]));
        let cart = CartAggregate::open(store, Session::authenticated(UserUuid::new())).await;

        cart.add(lily.uuid, 1).await?;

        let result = checkout(&cart, delivery("   ")).await;

        assert!(matches!(result, Err(CheckoutError::MissingAddress)));
        assert_eq!(cart.total_items(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_requires_a_user() {
        let cart = CartAggregate::new(Arc::new(MemoryCartStore::new()), Session::anonymous());

        let result = checkout(&cart, delivery("1 Garden Row")).await;

        assert!(
            matches!(result, Err(CheckoutError::Cart(CartError::NotAuthenticated))),
            "expected NotAuthenticated, got {result:?}"
        );
    }
}
