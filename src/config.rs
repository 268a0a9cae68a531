//! Authentication Configuration
//!
//! All configuration values are loaded from environment variables.
//! No hardcoded secrets or sensitive data.

use crate::error::AuthError;
use std::env;

/// Minimum signing secret length in bytes. HMAC-SHA256 keys shorter than the
/// digest size weaken the MAC, so anything under 32 bytes is rejected.
pub const MIN_SECRET_LEN: usize = 32;

/// Authentication configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for signing tokens (from API_SECRET env var)
    pub secret: String,

    /// Token lifetime in days (from TOKEN_TTL_DAYS env var)
    pub token_ttl_days: i64,

    /// Role granted to every newly registered account (from DEFAULT_ROLE env var)
    pub default_role: String,
}

impl AuthConfig {
    /// Load configuration from environment variables
    ///
    /// # Panics
    /// Panics if API_SECRET environment variable is not set
    pub fn from_env() -> Self {
        Self {
            secret: env::var("API_SECRET").expect("API_SECRET environment variable must be set"),

            token_ttl_days: env::var("TOKEN_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),

            default_role: env::var("DEFAULT_ROLE").unwrap_or_else(|_| "admin".to_string()),
        }
    }

    /// Build a configuration directly, for embedding callers and tests
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_days: 7,
            default_role: "admin".to_string(),
        }
    }

    /// Validate the configuration
    ///
    /// A short secret is a startup error, never an issue-time error.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.secret.len() < MIN_SECRET_LEN {
            return Err(AuthError::InvalidSecretKey);
        }

        if self.token_ttl_days <= 0 {
            return Err(AuthError::Config(
                "TOKEN_TTL_DAYS must be positive".to_string(),
            ));
        }

        if self.default_role.is_empty() {
            return Err(AuthError::Config(
                "DEFAULT_ROLE must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
