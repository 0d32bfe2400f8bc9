//! Remote cart store seam.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    carts::{
        errors::StoreError,
        models::{CartItem, NewCartItem},
    },
    products::ProductUuid,
    users::UserUuid,
};

/// Table-like primitives over persisted cart rows.
///
/// Implementations own the `(user, product)` uniqueness rule: at most one row
/// per pair, enforced by the upsert's conflict target.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Every row owned by `user`, joined with its product snapshot.
    async fn list_items(&self, user: UserUuid) -> Result<Vec<CartItem>, StoreError>;

    /// Insert a row, or set the quantity of the existing `(user, product)` row.
    async fn upsert_item(&self, user: UserUuid, item: NewCartItem) -> Result<(), StoreError>;

    /// Set the quantity of one row. Returns the number of rows touched.
    async fn update_quantity(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<u64, StoreError>;

    /// Delete one row. Returns the number of rows deleted.
    async fn delete_item(&self, user: UserUuid, product: ProductUuid) -> Result<u64, StoreError>;

    /// Delete every row owned by `user`. Returns the number of rows deleted.
    async fn delete_all(&self, user: UserUuid) -> Result<u64, StoreError>;
}
