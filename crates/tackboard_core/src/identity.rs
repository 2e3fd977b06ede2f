//! Identity provider contract.
//!
//! # Responsibility
//! - Expose the host's authentication state to the persistence bridge.
//!
//! # Invariants
//! - `current_user()` is only meaningful once `is_loaded()` reports true;
//!   before that the session must not resolve an identity.
//! - User ids are opaque strings assigned by the external provider.

use crate::model::board::UserId;

/// Read-only view of the host's authentication state.
pub trait IdentityProvider {
    /// The signed-in user, or `None` for a guest session.
    fn current_user(&self) -> Option<UserId>;

    /// Whether the provider has finished resolving the session.
    fn is_loaded(&self) -> bool;
}

/// Fixed in-process identity, mainly for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<UserId>,
    loaded: bool,
}

impl StaticIdentity {
    /// A resolved session for the given user.
    pub fn signed_in(user: impl Into<UserId>) -> Self {
        Self {
            user: Some(user.into()),
            loaded: true,
        }
    }

    /// A resolved guest session.
    pub fn guest() -> Self {
        Self {
            user: None,
            loaded: true,
        }
    }

    /// A provider still resolving; `current_user` is not yet meaningful.
    pub fn resolving() -> Self {
        Self {
            user: None,
            loaded: false,
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }
}
