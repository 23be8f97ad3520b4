//! Credential store
//!
//! The services depend on [`CredentialStore`], not on a concrete database.
//! [`PgCredentialStore`] is the production implementation over the
//! `users` and `opaque_jwt_token` tables; [`InMemoryCredentialStore`] keeps
//! the same uniqueness semantics in process for tests.

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod postgres;
pub mod session;
pub mod user;

pub use memory::InMemoryCredentialStore;
pub use postgres::PgCredentialStore;
pub use session::SessionRepository;
pub use user::{UserRecord, UserRepository};

/// Store-level failures
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint (username, opaque handle) rejected the write
    #[error("Unique constraint violated")]
    UniqueViolation,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify a write error, separating constraint conflicts from
    /// connectivity and query failures
    pub fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation;
            }
        }
        StoreError::Database(err)
    }
}

/// Persistence contract for users and session pairs
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a user; fails with [`StoreError::UniqueViolation`] when the
    /// username is taken
    async fn create_user(&self, user: &UserRecord) -> Result<(), StoreError>;

    /// Full user record including the password hash
    async fn find_user_by_username(&self, username: &str)
        -> Result<Option<UserRecord>, StoreError>;

    async fn save_session_pair(&self, opaque: &str, signed_token: &str) -> Result<(), StoreError>;

    /// Signed token bound to `opaque`, if any
    async fn find_session_by_opaque(&self, opaque: &str) -> Result<Option<String>, StoreError>;

    /// Connectivity probe for readiness checks
    async fn health_check(&self) -> Result<(), StoreError>;
}
