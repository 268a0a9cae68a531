//! CineVault Authentication Core
//!
//! Authentication core for the CineVault movie catalog API providing:
//! - Account registration with uniqueness enforcement
//! - Credential verification and login
//! - Argon2id password hashing
//! - Fixed role registry with idempotent bootstrap
//! - HS256 JWT bearer-token issuance (7-day expiry)
//!
//! The HTTP surface and catalog CRUD live in the consuming service; this
//! crate takes plain request structs and returns plain results. Token
//! verification also happens downstream, against the same shared secret.
//!
//! # Configuration
//!
//! Configuration is loaded from environment variables:
//! - `API_SECRET` - Secret key for signing JWTs (required, min 32 bytes)
//! - `TOKEN_TTL_DAYS` - Token lifetime in days (default: 7)
//! - `DEFAULT_ROLE` - Role granted to new accounts (default: "admin")
//!
//! # Usage
//!
//! ```rust,ignore
//! use cinevault_auth::{AuthConfig, AuthService, MemoryCredentialStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryCredentialStore::new());
//! let auth = AuthService::new(store, AuthConfig::from_env()).await?;
//!
//! let summary = auth.register(register_request).await?;
//! let result = auth.login(login_request).await?;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod password;
pub mod roles;
pub mod service;
pub mod store;
pub mod token;

// Re-export commonly used types
pub use config::AuthConfig;
pub use error::AuthError;
pub use models::*;
pub use password::Hasher;
pub use roles::{RoleRegistry, ROLE_ADMIN, ROLE_REGISTERED};
pub use service::AuthService;
pub use store::{CredentialStore, MemoryCredentialStore};
pub use token::TokenIssuer;
