//! Cart projection

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{carts::models::CartItem, products::ProductUuid};

/// The cart rows from the last successful read, with derived totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projection {
    items: Vec<CartItem>,
}

impl Projection {
    #[must_use]
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The row for `product`, if it is in the cart.
    #[must_use]
    pub fn get(&self, product: ProductUuid) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|item| item.product_uuid() == product)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Sum of unit price times quantity over every row. Zero when empty.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over every row. Zero when empty.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Projection {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use proptest::prelude::*;
    use rust_decimal::dec;

    use crate::{
        carts::models::{CartItemUuid, ProductSnapshot},
        users::UserUuid,
    };

    use super::*;

    fn item(price: Decimal, quantity: u32) -> CartItem {
        CartItem {
            uuid: CartItemUuid::new(),
            user_uuid: UserUuid::new(),
            product: ProductSnapshot {
                uuid: ProductUuid::new(),
                name: "Stem".to_string(),
                price,
                image_url: None,
            },
            quantity,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn empty_projection_has_zero_totals() {
        let projection = Projection::default();

        assert_eq!(projection.total_price(), Decimal::ZERO);
        assert_eq!(projection.total_items(), 0);
        assert!(projection.is_empty());
    }

    #[test]
    fn totals_cover_every_row() {
        let projection = Projection::new(vec![item(dec!(12.50), 2), item(dec!(3.99), 3)]);

        assert_eq!(projection.total_price(), dec!(36.97));
        assert_eq!(projection.total_items(), 5);
    }

    #[test]
    fn get_finds_row_by_product() {
        let rose = item(dec!(12.50), 1);
        let product = rose.product_uuid();
        let projection = Projection::new(vec![item(dec!(1), 1), rose]);

        assert_eq!(projection.get(product).map(|item| item.quantity), Some(1));
        assert!(projection.get(ProductUuid::new()).is_none());
    }

    proptest! {
        #[test]
        fn prop_total_price_is_sum_of_line_totals(
            lines in prop::collection::vec((0_u32..100_000, 1_u32..500), 0..32)
        ) {
            let projection = Projection::new(
                lines
                    .iter()
                    .map(|&(cents, quantity)| item(Decimal::new(i64::from(cents), 2), quantity))
                    .collect(),
            );

            let expected_cents: i64 = lines
                .iter()
                .map(|&(cents, quantity)| i64::from(cents) * i64::from(quantity))
                .sum();

            let expected_items: u64 = lines.iter().map(|&(_, quantity)| u64::from(quantity)).sum();

            prop_assert_eq!(projection.total_price(), Decimal::new(expected_cents, 2));
            prop_assert_eq!(projection.total_items(), expected_items);
        }
    }
}
