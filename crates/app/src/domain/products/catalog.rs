//! Postgres product catalog.

use async_trait::async_trait;
use bloom::products::{NewProduct, Product, ProductCatalog, ProductError, ProductUuid};

use crate::{
    database::Db,
    domain::products::{errors::catalog_error, repository::PgProductsRepository},
};

#[derive(Debug, Clone)]
pub struct PgProductCatalog {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductCatalog {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductCatalog for PgProductCatalog {
    #[tracing::instrument(name = "products.catalog.list_products", skip(self), err)]
    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        let mut tx = self.db.begin().await.map_err(catalog_error)?;

        let records = self
            .repository
            .list_products(&mut tx)
            .await
            .map_err(catalog_error)?;

        tx.commit().await.map_err(catalog_error)?;

        records.into_iter().map(Product::try_from).collect()
    }

    #[tracing::instrument(
        name = "products.catalog.get_product",
        skip(self),
        fields(product_uuid = %product),
        err
    )]
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductError> {
        let mut tx = self.db.begin().await.map_err(catalog_error)?;

        let record = self
            .repository
            .get_product(&mut tx, product)
            .await
            .map_err(catalog_error)?;

        tx.commit().await.map_err(catalog_error)?;

        Product::try_from(record)
    }

    #[tracing::instrument(
        name = "products.catalog.create_product",
        skip(self, product),
        fields(product_uuid = %product.uuid, name = %product.name),
        err
    )]
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductError> {
        product.validate()?;

        let mut tx = self.db.begin().await.map_err(catalog_error)?;

        let record = self
            .repository
            .create_product(&mut tx, &product)
            .await
            .map_err(catalog_error)?;

        tx.commit().await.map_err(catalog_error)?;

        Product::try_from(record)
    }
}
