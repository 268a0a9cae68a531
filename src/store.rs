//! Credential Store
//!
//! Persistence boundary for account records. The trait keeps the seam open
//! for a SQL-backed implementation; the in-memory store is the default and
//! is sufficient for embedding callers and tests.

use crate::error::AuthError;
use crate::models::Account;

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Storage contract for account records.
///
/// `insert` must make the uniqueness check and the write atomic: two
/// concurrent registrations for the same username yield exactly one success
/// and one `DuplicateUser`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Case-sensitive exact match on the stored username
    async fn find_by_username(&self, username: &str) -> Option<Account>;

    /// Case-insensitive match, used by the login path
    async fn find_by_username_any_case(&self, username: &str) -> Option<Account>;

    /// Lookup by account id
    async fn find_by_id(&self, id: Uuid) -> Option<Account>;

    /// Insert a new account, failing with `DuplicateUser` on a username clash
    async fn insert(&self, account: Account) -> Result<Account, AuthError>;

    /// Append a role to a stored account; duplicates are ignored
    async fn add_role(&self, username: &str, role: &str) -> Result<(), AuthError>;

    /// All accounts, sorted by username ascending
    async fn list_all(&self) -> Vec<Account>;
}

/// In-memory credential store keyed by exact username
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Option<Account> {
        self.accounts.read().await.get(username).cloned()
    }

    async fn find_by_username_any_case(&self, username: &str) -> Option<Account> {
        let needle = username.to_lowercase();
        self.accounts
            .read()
            .await
            .values()
            .find(|a| a.username.to_lowercase() == needle)
            .cloned()
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Account> {
        self.accounts
            .read()
            .await
            .values()
            .find(|a| a.id == id)
            .cloned()
    }

    async fn insert(&self, account: Account) -> Result<Account, AuthError> {
        // Check and insert under one write lock; this is the unique
        // constraint that serializes racing registrations.
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.username) {
            return Err(AuthError::DuplicateUser);
        }
        accounts.insert(account.username.clone(), account.clone());
        Ok(account)
    }

    async fn add_role(&self, username: &str, role: &str) -> Result<(), AuthError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(username).ok_or(AuthError::UserNotFound)?;
        if !account.roles.iter().any(|r| r == role) {
            account.roles.push(role.to_string());
        }
        Ok(())
    }

    async fn list_all(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.read().await.values().cloned().collect();
        accounts.sort_by(|a, b| a.username.cmp(&b.username));
        accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn account(username: &str) -> Account {
        Account::new(username, username, "hash".into())
    }

    #[tokio::test]
    async fn test_insert_and_exact_lookup() {
        let store = MemoryCredentialStore::new();
        store.insert(account("alice")).await.unwrap();

        assert!(store.find_by_username("alice").await.is_some());
        // Exact match is case-sensitive
        assert!(store.find_by_username("ALICE").await.is_none());
    }

    #[tokio::test]
    async fn test_case_insensitive_lookup() {
        let store = MemoryCredentialStore::new();
        store.insert(account("alice")).await.unwrap();

        let found = store.find_by_username_any_case("ALICE").await.unwrap();
        assert_eq!(found.username, "alice");
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected() {
        let store = MemoryCredentialStore::new();
        store.insert(account("alice")).await.unwrap();

        let err = store.insert(account("alice")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUser));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryCredentialStore::new();
        let inserted = store.insert(account("alice")).await.unwrap();

        let found = store.find_by_id(inserted.id).await.unwrap();
        assert_eq!(found.username, "alice");
        assert!(store.find_by_id(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_add_role_deduplicates() {
        let store = MemoryCredentialStore::new();
        store.insert(account("alice")).await.unwrap();

        store.add_role("alice", "admin").await.unwrap();
        store.add_role("alice", "admin").await.unwrap();
        store.add_role("alice", "registered").await.unwrap();

        let found = store.find_by_username("alice").await.unwrap();
        assert_eq!(found.roles, vec!["admin", "registered"]);
    }

    #[tokio::test]
    async fn test_add_role_unknown_user() {
        let store = MemoryCredentialStore::new();
        let err = store.add_role("ghost", "admin").await.unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_list_all_sorted() {
        let store = MemoryCredentialStore::new();
        store.insert(account("carol")).await.unwrap();
        store.insert(account("alice")).await.unwrap();
        store.insert(account("bob")).await.unwrap();

        let names: Vec<String> = store
            .list_all()
            .await
            .into_iter()
            .map(|a| a.username)
            .collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn test_concurrent_insert_single_winner() {
        let store = Arc::new(MemoryCredentialStore::new());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(
                async move { store.insert(account("alice")).await },
            ));
        }

        let mut successes = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(AuthError::DuplicateUser) => duplicates += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 15);
        assert_eq!(store.list_all().await.len(), 1);
    }
}
