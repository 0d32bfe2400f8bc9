//! In-process cart store.
//!
//! Mirrors the Postgres store's semantics (unique `(user, product)` rows,
//! set-on-conflict upsert, unknown products rejected) without a database.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use jiff::Timestamp;
use rustc_hash::FxHashMap;

use crate::{
    carts::{
        errors::StoreError,
        models::{CartItem, CartItemUuid, NewCartItem, ProductSnapshot},
        store::CartStore,
    },
    products::ProductUuid,
    users::UserUuid,
};

#[derive(Debug, Clone)]
struct Row {
    uuid: CartItemUuid,
    quantity: u32,
    created_at: Timestamp,
}

#[derive(Debug, Default)]
struct Tables {
    products: FxHashMap<ProductUuid, ProductSnapshot>,
    rows: FxHashMap<(UserUuid, ProductUuid), Row>,
}

#[derive(Debug, Default)]
pub struct MemoryCartStore {
    tables: Mutex<Tables>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given products.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = ProductSnapshot>) -> Self {
        let store = Self::new();

        for product in products {
            store.insert_product(product);
        }

        store
    }

    /// Add or replace a product that cart rows may reference.
    pub fn insert_product(&self, product: ProductSnapshot) {
        self.tables().products.insert(product.uuid, product);
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn list_items(&self, user: UserUuid) -> Result<Vec<CartItem>, StoreError> {
        let tables = self.tables();

        let mut items = tables
            .rows
            .iter()
            .filter(|((owner, _), _)| *owner == user)
            .map(|((_, product), row)| {
                let snapshot = tables
                    .products
                    .get(product)
                    .cloned()
                    .ok_or(StoreError::UnknownProduct)?;

                Ok(CartItem {
                    uuid: row.uuid,
                    user_uuid: user,
                    product: snapshot,
                    quantity: row.quantity,
                    created_at: row.created_at,
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        items.sort_by(|a, b| (a.created_at, a.uuid).cmp(&(b.created_at, b.uuid)));

        Ok(items)
    }

    async fn upsert_item(&self, user: UserUuid, item: NewCartItem) -> Result<(), StoreError> {
        let mut tables = self.tables();

        if !tables.products.contains_key(&item.product_uuid) {
            return Err(StoreError::UnknownProduct);
        }

        tables
            .rows
            .entry((user, item.product_uuid))
            .and_modify(|row| row.quantity = item.quantity)
            .or_insert_with(|| Row {
                uuid: item.uuid,
                quantity: item.quantity,
                created_at: Timestamp::now(),
            });

        Ok(())
    }

    async fn update_quantity(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<u64, StoreError> {
        let mut tables = self.tables();

        Ok(tables
            .rows
            .get_mut(&(user, product))
            .map_or(0, |row| {
                row.quantity = quantity;
                1
            }))
    }

    async fn delete_item(&self, user: UserUuid, product: ProductUuid) -> Result<u64, StoreError> {
        Ok(u64::from(self.tables().rows.remove(&(user, product)).is_some()))
    }

    async fn delete_all(&self, user: UserUuid) -> Result<u64, StoreError> {
        let mut tables = self.tables();
        let before = tables.rows.len();

        tables.rows.retain(|(owner, _), _| *owner != user);

        Ok(u64::try_from(before - tables.rows.len()).unwrap_or(u64::MAX))
    }
}
