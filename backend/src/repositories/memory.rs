//! In-process [`CredentialStore`]
//!
//! Mirrors the relational store's constraints: usernames and opaque handles
//! are unique, and nothing is ever deleted.

use super::{CredentialStore, StoreError, UserRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCredentialStore {
    users: RwLock<HashMap<String, UserRecord>>,
    sessions: RwLock<HashMap<String, String>>,
    session_lookups: AtomicUsize,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find_session_by_opaque` calls served so far
    pub fn session_lookups(&self) -> usize {
        self.session_lookups.load(Ordering::Relaxed)
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(StoreError::UniqueViolation);
        }
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn save_session_pair(&self, opaque: &str, signed_token: &str) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(opaque) {
            return Err(StoreError::UniqueViolation);
        }
        sessions.insert(opaque.to_string(), signed_token.to_string());
        Ok(())
    }

    async fn find_session_by_opaque(&self, opaque: &str) -> Result<Option<String>, StoreError> {
        self.session_lookups.fetch_add(1, Ordering::Relaxed);
        Ok(self.sessions.read().await.get(opaque).cloned())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
