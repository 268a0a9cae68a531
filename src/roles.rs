//! Role Registry
//!
//! Owns the set of known role names and assigns roles to stored accounts.
//! Role creation is idempotent; assignment of a role that was never ensured
//! is a configuration error.

use crate::error::AuthError;
use crate::store::CredentialStore;

use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Role granted to new registrations by default
pub const ROLE_ADMIN: &str = "admin";
/// Baseline role every deployment carries
pub const ROLE_REGISTERED: &str = "registered";

/// Registry of known authorization roles
pub struct RoleRegistry {
    store: Arc<dyn CredentialStore>,
    roles: RwLock<BTreeSet<String>>,
}

impl RoleRegistry {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            roles: RwLock::new(BTreeSet::new()),
        }
    }

    /// Create the fixed role set. Called once at service construction instead
    /// of lazily inside request handling; safe to call again.
    pub async fn bootstrap(&self) {
        self.ensure(ROLE_ADMIN).await;
        self.ensure(ROLE_REGISTERED).await;
        let known = self.roles().await;
        tracing::info!(roles = ?known, "Role registry bootstrapped");
    }

    /// Create a role if absent; ensuring an existing role is a no-op
    pub async fn ensure(&self, name: &str) {
        self.roles.write().await.insert(name.to_string());
    }

    pub async fn exists(&self, name: &str) -> bool {
        self.roles.read().await.contains(name)
    }

    /// Assign a known role to a stored account.
    ///
    /// Fails with `RoleNotFound` if the role was never ensured; that means
    /// bootstrap was skipped and is logged as such.
    pub async fn assign(&self, username: &str, name: &str) -> Result<(), AuthError> {
        if !self.exists(name).await {
            tracing::error!(role = name, "Role assignment before bootstrap");
            return Err(AuthError::RoleNotFound(name.to_string()));
        }
        self.store.add_role(username, name).await
    }

    /// Known role names, sorted
    pub async fn roles(&self) -> Vec<String> {
        self.roles.read().await.iter().cloned().collect()
    }
}
