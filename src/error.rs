//! Authentication Error Types
//!
//! Centralized error handling for all authentication operations.
//!
//! Bad credentials are deliberately NOT an error: `AuthService::login`
//! signals them through an empty [`crate::models::LoginResult`] instead.

/// Authentication errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("Username already registered")]
    DuplicateUser,

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Signing secret is too short for HMAC-SHA256")]
    InvalidSecretKey,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error")]
    Internal,
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        tracing::error!("Password hashing error: {:?}", err);
        AuthError::Internal
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("JWT signing error: {:?}", err);
        AuthError::Internal
    }
}
