//! User service for registration and session orchestration
//!
//! # Performance Optimizations
//!
//! - Password hashing/verification runs on blocking thread pool
//! - JWT keys are pre-computed once and shared through `SessionExchange`
//! - The credential store wraps a pooled connection

use super::SessionExchange;
use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CredentialStore, StoreError, UserRecord};
use identity_shared::UserPublicView;
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Registration, login and token resolution over one credential store
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    sessions: SessionExchange,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, jwt: JwtService) -> Self {
        let sessions = SessionExchange::new(store.clone(), jwt);
        Self { store, sessions }
    }

    /// Register a new user
    ///
    /// Username uniqueness is decided by the store; a conflict surfaces as
    /// [`ApiError::Conflict`], distinct from other store failures.
    pub async fn register(
        &self,
        username: &str,
        name: &str,
        password: SecretString,
    ) -> Result<UserPublicView, ApiError> {
        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(password).await?;

        let user = UserRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            username: username.to_string(),
            password_hash,
        };

        let result = self.store.create_user(&user).await;
        metrics::counter!("identity_registrations_total", "outcome" => register_outcome(&result))
            .increment(1);

        match result {
            Ok(()) => {}
            Err(StoreError::UniqueViolation) => {
                warn!(username = %user.username, "Username already taken");
                return Err(ApiError::Conflict("username already taken".to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        info!(user_id = %user.id, "User registered");

        Ok(UserPublicView {
            id: user.id,
            name: user.name,
            username: user.username,
        })
    }

    /// Authenticate and return an opaque session handle
    pub async fn login(&self, username: &str, password: SecretString) -> Result<String, ApiError> {
        let result = self.sessions.login(username, password).await;
        metrics::counter!("identity_logins_total", "outcome" => login_outcome(&result))
            .increment(1);
        result
    }

    /// Exchange an opaque handle for the signed access token
    pub async fn resolve(&self, opaque: &str) -> Result<String, ApiError> {
        self.sessions.resolve(opaque).await
    }

    /// Readiness of the backing store
    pub async fn store_ready(&self) -> Result<(), StoreError> {
        self.store.health_check().await
    }
}

fn register_outcome(result: &Result<(), StoreError>) -> &'static str {
    match result {
        Ok(()) => "success",
        Err(StoreError::UniqueViolation) => "conflict",
        Err(_) => "error",
    }
}

fn login_outcome<T>(result: &Result<T, ApiError>) -> &'static str {
    match result {
        Ok(_) => "success",
        Err(ApiError::NotFound(_)) => "unknown_user",
        Err(ApiError::InvalidCredentials) => "invalid_credentials",
        Err(_) => "error",
    }
}
