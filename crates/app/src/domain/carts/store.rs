//! Postgres cart store.

use async_trait::async_trait;
use bloom::{
    carts::{CartItem, CartStore, NewCartItem, StoreError},
    products::ProductUuid,
    users::UserUuid,
};

use crate::{
    database::Db,
    domain::carts::{errors::store_error, repository::PgCartItemsRepository},
};

/// Cart rows in Postgres, one transaction per call with the user's RLS context set.
#[derive(Debug, Clone)]
pub struct PgCartStore {
    db: Db,
    repository: PgCartItemsRepository,
}

impl PgCartStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartStore for PgCartStore {
    #[tracing::instrument(name = "carts.store.list_items", skip(self), fields(user_uuid = %user), err)]
    async fn list_items(&self, user: UserUuid) -> Result<Vec<CartItem>, StoreError> {
        let mut tx = self
            .db
            .begin_user_transaction(user)
            .await
            .map_err(store_error)?;

        let records = self
            .repository
            .list_cart_items(&mut tx, user)
            .await
            .map_err(store_error)?;

        tx.commit().await.map_err(store_error)?;

        records.into_iter().map(CartItem::try_from).collect()
    }

    #[tracing::instrument(
        name = "carts.store.upsert_item",
        skip(self, item),
        fields(
            user_uuid = %user,
            product_uuid = %item.product_uuid,
            quantity = item.quantity
        ),
        err
    )]
    async fn upsert_item(&self, user: UserUuid, item: NewCartItem) -> Result<(), StoreError> {
        let mut tx = self
            .db
            .begin_user_transaction(user)
            .await
            .map_err(store_error)?;

        self.repository
            .upsert_cart_item(&mut tx, user, item)
            .await
            .map_err(store_error)?;

        tx.commit().await.map_err(store_error)
    }

    #[tracing::instrument(
        name = "carts.store.update_quantity",
        skip(self),
        fields(user_uuid = %user, product_uuid = %product),
        err
    )]
    async fn update_quantity(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<u64, StoreError> {
        let mut tx = self
            .db
            .begin_user_transaction(user)
            .await
            .map_err(store_error)?;

        let rows_affected = self
            .repository
            .update_quantity(&mut tx, user, product, quantity)
            .await
            .map_err(store_error)?;

        tx.commit().await.map_err(store_error)?;

        Ok(rows_affected)
    }

    #[tracing::instrument(
        name = "carts.store.delete_item",
        skip(self),
        fields(user_uuid = %user, product_uuid = %product),
        err
    )]
    async fn delete_item(&self, user: UserUuid, product: ProductUuid) -> Result<u64, StoreError> {
        let mut tx = self
            .db
            .begin_user_transaction(user)
            .await
            .map_err(store_error)?;

        let rows_affected = self
            .repository
            .delete_cart_item(&mut tx, user, product)
            .await
            .map_err(store_error)?;

        tx.commit().await.map_err(store_error)?;

        Ok(rows_affected)
    }

    #[tracing::instrument(name = "carts.store.delete_all", skip(self), fields(user_uuid = %user), err)]
    async fn delete_all(&self, user: UserUuid) -> Result<u64, StoreError> {
        let mut tx = self
            .db
            .begin_user_transaction(user)
            .await
            .map_err(store_error)?;

        let rows_affected = self
            .repository
            .delete_cart_items(&mut tx, user)
            .await
            .map_err(store_error)?;

        tx.commit().await.map_err(store_error)?;

        Ok(rows_affected)
    }
}
