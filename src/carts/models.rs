//! Cart Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    carts::errors::StoreError,
    products::{Product, ProductUuid},
    users::UserUuid,
    uuids::TypedUuid,
};

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// Product fields copied onto each cart row when it is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

impl ProductSnapshot {
    /// Build a snapshot from joined store columns.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRow`] when the name is blank or the price is negative.
    pub fn new(
        uuid: ProductUuid,
        name: String,
        price: Decimal,
        image_url: Option<String>,
    ) -> Result<Self, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidRow(format!("product {uuid} has no name")));
        }

        if price < Decimal::ZERO {
            return Err(StoreError::InvalidRow(format!(
                "product {uuid} has negative price {price}"
            )));
        }

        Ok(Self {
            uuid,
            name,
            price,
            image_url,
        })
    }
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            uuid: product.uuid,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

/// CartItem Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub user_uuid: UserUuid,
    pub product: ProductSnapshot,
    pub quantity: u32,
    pub created_at: Timestamp,
}

impl CartItem {
    #[must_use]
    pub fn product_uuid(&self) -> ProductUuid {
        self.product.uuid
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// New Cart Item Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    /// Row id used when the `(user, product)` pair has no row yet.
    pub uuid: CartItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

/// Convert a stored quantity into the positive count a cart row must hold.
///
/// # Errors
///
/// Returns [`StoreError::InvalidRow`] for zero, negative or out-of-range values.
pub fn checked_quantity(raw: i64) -> Result<u32, StoreError> {
    u32::try_from(raw)
        .ok()
        .filter(|quantity| *quantity > 0)
        .ok_or_else(|| StoreError::InvalidRow(format!("quantity {raw} is not a positive count")))
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn snapshot_rejects_negative_price() {
        let result = ProductSnapshot::new(ProductUuid::new(), "Rose".to_string(), dec!(-1), None);

        assert!(matches!(result, Err(StoreError::InvalidRow(_))));
    }

    #[test]
    fn snapshot_rejects_blank_name() {
        let result = ProductSnapshot::new(ProductUuid::new(), " ".to_string(), dec!(1), None);

        assert!(matches!(result, Err(StoreError::InvalidRow(_))));
    }

    #[test]
    fn checked_quantity_only_accepts_positive_counts() {
        assert!(matches!(checked_quantity(3), Ok(3)));
        assert!(checked_quantity(0).is_err());
        assert!(checked_quantity(-2).is_err());
        assert!(checked_quantity(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let item = CartItem {
            uuid: CartItemUuid::new(),
            user_uuid: UserUuid::new(),
            product: ProductSnapshot {
                uuid: ProductUuid::new(),
                name: "Tulips".to_string(),
                price: dec!(7.25),
                image_url: None,
            },
            quantity: 4,
            created_at: Timestamp::UNIX_EPOCH,
        };

        assert_eq!(item.line_total(), dec!(29.00));
    }
}
