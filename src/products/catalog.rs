//! Product catalog seam.

use async_trait::async_trait;
use mockall::automock;

use crate::products::{
    errors::ProductError,
    models::{NewProduct, Product, ProductUuid},
};

#[automock]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// List every product, newest first.
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductError>;

    /// Add a product to the catalog.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductError>;
}
