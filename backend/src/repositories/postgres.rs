//! PostgreSQL-backed [`CredentialStore`]

use super::{CredentialStore, SessionRepository, StoreError, UserRecord, UserRepository};
use crate::db;
use async_trait::async_trait;
use sqlx::PgPool;

/// Credential store over a shared connection pool
///
/// `PgPool` is internally reference counted, so cloning the store is cheap
/// and every clone shares the same connections.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn create_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        UserRepository::create(&self.pool, user).await
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        UserRepository::find_by_username(&self.pool, username).await
    }

    async fn save_session_pair(&self, opaque: &str, signed_token: &str) -> Result<(), StoreError> {
        SessionRepository::save(&self.pool, opaque, signed_token).await
    }

    async fn find_session_by_opaque(&self, opaque: &str) -> Result<Option<String>, StoreError> {
        SessionRepository::find_by_opaque(&self.pool, opaque).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        db::ping(&self.pool).await.map_err(StoreError::from)
    }
}
