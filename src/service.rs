//! Authentication Service
//!
//! Orchestrates the credential store, password hasher, role registry and
//! token issuer behind two request/response operations: register and login.

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::models::*;
use crate::password::Hasher;
use crate::roles::{RoleRegistry, ROLE_ADMIN, ROLE_REGISTERED};
use crate::store::CredentialStore;
use crate::token::TokenIssuer;

use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Authentication service
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: Hasher,
    roles: RoleRegistry,
    tokens: TokenIssuer,
    config: AuthConfig,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    /// Create a new authentication service.
    ///
    /// Validates the configuration (a short signing secret fails here, at
    /// startup) and bootstraps the fixed role set before any request runs.
    pub async fn new(
        store: Arc<dyn CredentialStore>,
        config: AuthConfig,
    ) -> Result<Self, AuthError> {
        config.validate()?;

        let roles = RoleRegistry::new(store.clone());
        roles.bootstrap().await;

        tracing::info!(default_role = %config.default_role, "Authentication service ready");

        Ok(Self {
            store,
            hasher: Hasher::new(),
            tokens: TokenIssuer::new(&config),
            roles,
            config,
        })
    }

    /// Get reference to config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    // ============================================
    // Registration
    // ============================================

    /// Register a new account.
    ///
    /// Username uniqueness is exact-match; the store's insert is the unique
    /// constraint, so racing registrations for one username produce exactly
    /// one success.
    pub async fn register(&self, req: RegisterRequest) -> Result<AccountSummary, AuthError> {
        req.validate()
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.store.find_by_username(&req.username).await.is_some() {
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let account = Account::new(&req.username, &req.display_name, password_hash);
        let account = self.store.insert(account).await?;

        // Idempotent; bootstrap already ran at construction.
        self.roles.ensure(ROLE_ADMIN).await;
        self.roles.ensure(ROLE_REGISTERED).await;

        self.roles
            .assign(&account.username, &self.config.default_role)
            .await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            role = %self.config.default_role,
            "Account registered"
        );

        Ok(AccountSummary::from(&account))
    }

    /// Check whether a username is still free (exact match)
    pub async fn is_username_available(&self, username: &str) -> bool {
        self.store.find_by_username(username).await.is_none()
    }

    // ============================================
    // Login
    // ============================================

    /// Authenticate a credential pair and issue a bearer token.
    ///
    /// Unknown usernames and wrong passwords both return the empty
    /// [`LoginResult`]; bad credentials are an expected outcome, not an
    /// error. Lookup is case-insensitive, the issued claims carry the stored
    /// username and the account's first role.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResult, AuthError> {
        let Some(account) = self.store.find_by_username_any_case(&req.username).await else {
            tracing::debug!(username = %req.username, "Login for unknown username");
            return Ok(LoginResult::denied());
        };

        if !self.hasher.verify(&req.password, &account.password_hash) {
            tracing::debug!(username = %account.username, "Login with wrong password");
            return Ok(LoginResult::denied());
        }

        let role = account.primary_role().unwrap_or_default();
        let token = self.tokens.issue(&account.username, role)?;

        tracing::info!(username = %account.username, role = %role, "Login succeeded");

        Ok(LoginResult {
            account: Some(AccountSummary::from(&account)),
            token,
        })
    }

    // ============================================
    // Account Queries
    // ============================================

    /// All registered accounts sorted by username
    pub async fn accounts(&self) -> Vec<AccountSummary> {
        self.store
            .list_all()
            .await
            .iter()
            .map(AccountSummary::from)
            .collect()
    }

    /// Single account by id
    pub async fn account(&self, id: Uuid) -> Option<AccountSummary> {
        self.store.find_by_id(id).await.map(AccountSummary::from)
    }

    /// Stored roles for a username (exact match)
    pub async fn roles_of(&self, username: &str) -> Result<Vec<String>, AuthError> {
        let account = self
            .store
            .find_by_username(username)
            .await
            .ok_or(AuthError::UserNotFound)?;
        Ok(account.roles)
    }
}
