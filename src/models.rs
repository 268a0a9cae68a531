//! Authentication Models
//!
//! Data structures for authentication requests, responses, and stored entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ============================================
// Stored Entities
// ============================================

/// A registered user account.
///
/// Owned exclusively by the credential store; callers see [`AccountSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    /// Mirrors the username; the catalog API uses usernames as addresses.
    pub email: String,
    /// Uppercased username, kept for case-insensitive uniqueness checks.
    pub normalized_email: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assignment order is preserved; the first role is embedded in tokens.
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build a fresh account record with no roles assigned yet
    pub fn new(username: &str, display_name: &str, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: username.to_string(),
            normalized_email: username.to_uppercase(),
            display_name: display_name.to_string(),
            password_hash,
            roles: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// First assigned role, if any
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

// ============================================
// Request DTOs
// ============================================

/// Registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Display name is required"))]
    pub display_name: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================
// Response DTOs
// ============================================

/// Public account data without credential material
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            display_name: account.display_name.clone(),
        }
    }
}

impl From<Account> for AccountSummary {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            display_name: account.display_name,
        }
    }
}

/// Login outcome.
///
/// Bad credentials produce `{ account: None, token: "" }` rather than an
/// error; absence of the account is the failure signal.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub account: Option<AccountSummary>,
    pub token: String,
}

impl LoginResult {
    /// The empty result returned for unknown users and wrong passwords
    pub fn denied() -> Self {
        Self {
            account: None,
            token: String::new(),
        }
    }

    pub fn is_denied(&self) -> bool {
        self.account.is_none()
    }
}

// ============================================
// JWT Claims
// ============================================

/// Claims embedded in issued bearer tokens.
///
/// Fixed structure on purpose: ad-hoc claim lists make malformed tokens too
/// easy to construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject username
    pub name: String,
    /// Primary role of the subject
    pub role: String,
    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_new_mirrors_email() {
        let account = Account::new("alice", "Alice", "hash".into());
        assert_eq!(account.email, "alice");
        assert_eq!(account.normalized_email, "ALICE");
        assert!(account.roles.is_empty());
    }

    #[test]
    fn test_summary_never_serializes_hash() {
        let account = Account::new("alice", "Alice", "supersecret".into());
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("supersecret"));

        let summary = AccountSummary::from(&account);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("supersecret"));
        assert!(json.contains("alice"));
    }

    #[test]
    fn test_denied_login_result() {
        let result = LoginResult::denied();
        assert!(result.is_denied());
        assert!(result.token.is_empty());
    }

    #[test]
    fn test_register_request_validation() {
        let req = RegisterRequest {
            username: String::new(),
            password: "pw".into(),
            display_name: "Bob".into(),
        };
        assert!(req.validate().is_err());

        let req = RegisterRequest {
            username: "bob".into(),
            password: "pw".into(),
            display_name: "Bob".into(),
        };
        assert!(req.validate().is_ok());
    }
}
