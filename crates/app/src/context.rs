//! App Context

use std::sync::Arc;

use bloom::{carts::CartStore, products::ProductCatalog};
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{carts::PgCartStore, products::PgProductCatalog},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub db: Db,
    pub carts: Arc<dyn CartStore>,
    pub products: Arc<dyn ProductCatalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            carts: Arc::new(PgCartStore::new(db.clone())),
            products: Arc::new(PgProductCatalog::new(db.clone())),
            db,
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::new(Db::new(pool)))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}
