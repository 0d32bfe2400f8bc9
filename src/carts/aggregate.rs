//! Cart aggregate
//!
//! Every mutation is "fetch-after-write": the write goes to the store, and on
//! success the whole cart is read back and installed as the new projection.
//! Nothing is patched locally.
//!
//! Each fetch takes a token from a monotonic counter. A response is installed
//! only when its token is newer than the last installed one, so a slow read
//! that resolves after a faster, later read cannot roll the projection back.
//! Switching session also takes a token, which invalidates every read still in
//! flight for the previous user.

use std::{
    fmt,
    sync::{
        Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
        atomic::{AtomicU64, Ordering},
    },
};

use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use crate::{
    carts::{
        errors::{CartError, StoreError},
        models::{CartItemUuid, NewCartItem},
        projection::Projection,
        store::CartStore,
    },
    products::ProductUuid,
    users::{Session, UserUuid},
};

/// Outcome of a [`CartAggregate::fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The read was installed as the current projection.
    Applied,

    /// A newer read or a session change superseded this one.
    Discarded,

    /// The store read failed; the previous projection is kept.
    Failed,
}

#[derive(Debug)]
struct CartState {
    session: Session,
    projection: Projection,
    loading: bool,
    installed: u64,
}

pub struct CartAggregate {
    store: Arc<dyn CartStore>,
    state: RwLock<CartState>,
    issued: AtomicU64,
}

impl fmt::Debug for CartAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartAggregate")
            .field("state", &*self.read())
            .field("issued", &self.issued.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl CartAggregate {
    /// Create an aggregate for `session` with an empty projection.
    ///
    /// The aggregate reports [`is_loading`](Self::is_loading) until the first
    /// [`fetch`](Self::fetch) settles.
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>, session: Session) -> Self {
        Self {
            store,
            state: RwLock::new(CartState {
                session,
                projection: Projection::default(),
                loading: true,
                installed: 0,
            }),
            issued: AtomicU64::new(0),
        }
    }

    /// Create an aggregate and load the session's cart.
    pub async fn open(store: Arc<dyn CartStore>, session: Session) -> Self {
        let cart = Self::new(store, session);

        cart.fetch().await;

        cart
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.read().session
    }

    /// Replace the session context.
    ///
    /// The projection resets to empty, reads in flight for the previous user
    /// are discarded when they land, and the new user's cart is fetched.
    pub async fn switch_session(&self, session: Session) -> Refresh {
        let token = self.issue_token();

        {
            let mut state = self.write();

            state.session = session;
            state.projection = Projection::default();
            state.loading = true;
            state.installed = token;
        }

        debug!(authenticated = session.is_authenticated(), "switched cart session");

        self.fetch().await
    }

    /// Snapshot of the current projection.
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.read().projection.clone()
    }

    /// Sum of unit price times quantity over the current projection.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.read().projection.total_price()
    }

    /// Sum of quantities over the current projection.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.read().projection.total_items()
    }

    /// True until the first read for the current session has settled.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// Load the current user's cart.
    ///
    /// Never fails: with nobody signed in the projection becomes empty, and a
    /// failed read is logged and leaves the previous projection in place.
    #[tracing::instrument(
        name = "carts.aggregate.fetch",
        skip(self),
        fields(token = tracing::field::Empty)
    )]
    pub async fn fetch(&self) -> Refresh {
        let token = self.issue_token();

        tracing::Span::current().record("token", token);

        let Some(user) = self.session().user() else {
            return self.install(token, None, Projection::default());
        };

        match self.store.list_items(user).await {
            Ok(items) => self.install(token, Some(user), Projection::new(items)),
            Err(source) => {
                error!(user_uuid = %user, "failed to fetch cart: {source}");

                let mut state = self.write();

                if token > state.installed {
                    state.loading = false;
                }

                Refresh::Failed
            }
        }
    }

    /// Same as [`fetch`](Self::fetch).
    pub async fn refetch(&self) -> Refresh {
        self.fetch().await
    }

    /// Put `quantity` of `product` in the cart.
    ///
    /// If the product already has a row its quantity is set to `quantity`.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotAuthenticated`]: nobody is signed in; the store is not touched.
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::Store`]: the upsert failed.
    pub async fn add(&self, product: ProductUuid, quantity: u32) -> Result<(), CartError> {
        let user = self.require_user("add")?;

        if quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }

        let item = NewCartItem {
            uuid: CartItemUuid::new(),
            product_uuid: product,
            quantity,
        };

        let result = self.store.upsert_item(user, item).await;

        self.settle("add", result).await?;

        debug!(user_uuid = %user, product_uuid = %product, quantity, "added product to cart");

        Ok(())
    }

    /// Set the quantity of `product`. Zero or less removes it.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotAuthenticated`]: nobody is signed in.
    /// - [`CartError::InvalidQuantity`]: `quantity` does not fit a cart row.
    /// - [`CartError::Store`]: the update (or removal) failed.
    pub async fn update_quantity(
        &self,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<(), CartError> {
        let user = self.require_user("update_quantity")?;

        if quantity <= 0 {
            return self.remove(product).await;
        }

        let quantity =
            u32::try_from(quantity).map_err(|_err| CartError::InvalidQuantity(quantity))?;

        let result = self.store.update_quantity(user, product, quantity).await;

        let rows_affected = self.settle("update_quantity", result).await?;

        debug!(
            user_uuid = %user,
            product_uuid = %product,
            quantity,
            rows_affected,
            "updated cart quantity"
        );

        Ok(())
    }

    /// Take `product` out of the cart. Removing an absent product succeeds.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotAuthenticated`]: nobody is signed in.
    /// - [`CartError::Store`]: the delete failed.
    pub async fn remove(&self, product: ProductUuid) -> Result<(), CartError> {
        let user = self.require_user("remove")?;

        let result = self.store.delete_item(user, product).await;

        let rows_affected = self.settle("remove", result).await?;

        debug!(
            user_uuid = %user,
            product_uuid = %product,
            rows_affected,
            "removed product from cart"
        );

        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotAuthenticated`]: nobody is signed in.
    /// - [`CartError::Store`]: the bulk delete failed.
    pub async fn clear(&self) -> Result<(), CartError> {
        let user = self.require_user("clear")?;

        let result = self.store.delete_all(user).await;

        let rows_affected = self.settle("clear", result).await?;

        debug!(user_uuid = %user, rows_affected, "cleared cart");

        Ok(())
    }

    fn require_user(&self, operation: &'static str) -> Result<UserUuid, CartError> {
        self.session().user().ok_or_else(|| {
            warn!(operation, "cart operation attempted without a signed-in user");

            CartError::NotAuthenticated
        })
    }

    /// Refetch after a successful write, or log and surface a failed one.
    async fn settle<T>(
        &self,
        operation: &'static str,
        result: Result<T, StoreError>,
    ) -> Result<T, CartError> {
        match result {
            Ok(value) => {
                self.fetch().await;

                Ok(value)
            }
            Err(source) => {
                error!(operation, "cart write failed: {source}");

                Err(CartError::Store(source))
            }
        }
    }

    fn install(&self, token: u64, user: Option<UserUuid>, projection: Projection) -> Refresh {
        let mut state = self.write();

        if token <= state.installed || state.session.user() != user {
            debug!(token, installed = state.installed, "discarding stale cart read");

            return Refresh::Discarded;
        }

        state.projection = projection;
        state.installed = token;
        state.loading = false;

        Refresh::Applied
    }

    fn issue_token(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn read(&self) -> RwLockReadGuard<'_, CartState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CartState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
