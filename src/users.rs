//! Users & Sessions

use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Marker for user identifiers. Users live in the hosted auth service.
#[derive(Debug)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// The authenticated context a cart is scoped to.
///
/// Passed explicitly into anything that needs "the current user" so there is
/// no ambient global session. Signing out is `Session::anonymous()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<UserUuid>,
}

impl Session {
    /// Session for a signed-in user.
    #[must_use]
    pub fn authenticated(user: UserUuid) -> Self {
        Self { user: Some(user) }
    }

    /// Session with nobody signed in.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<UserUuid> {
        self.user
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl From<Option<UserUuid>> for Session {
    fn from(user: Option<UserUuid>) -> Self {
        Self { user }
    }
}
