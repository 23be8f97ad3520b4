//! Session exchange
//!
//! Login binds a fresh opaque handle to a freshly signed token and hands out
//! only the handle. Resolution turns the handle back into the signed token.
//! Expiry is not checked here; whoever verifies the signed token enforces it.

use crate::auth::{issue_opaque_handle, JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::CredentialStore;
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct SessionExchange {
    store: Arc<dyn CredentialStore>,
    jwt: JwtService,
}

impl SessionExchange {
    pub fn new(store: Arc<dyn CredentialStore>, jwt: JwtService) -> Self {
        Self { store, jwt }
    }

    /// Authenticate and issue a session; returns the opaque handle only
    ///
    /// # Performance
    /// Password verification is offloaded to blocking thread pool.
    pub async fn login(&self, username: &str, password: SecretString) -> Result<String, ApiError> {
        let user = self
            .store
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

        if !PasswordService::verify_async(password, user.password_hash).await? {
            return Err(ApiError::InvalidCredentials);
        }

        let signed_token = self.jwt.issue_signed_token(user.id)?;
        let opaque = issue_opaque_handle()?;

        self.store.save_session_pair(&opaque, &signed_token).await?;

        info!(user_id = %user.id, "Session issued");
        Ok(opaque)
    }

    /// Exchange an opaque handle for its signed token
    ///
    /// An empty handle is rejected without a store lookup, and an unknown
    /// handle is indistinguishable from an empty one.
    pub async fn resolve(&self, opaque: &str) -> Result<String, ApiError> {
        if opaque.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        match self.store.find_session_by_opaque(opaque).await? {
            Some(signed_token) => Ok(signed_token),
            None => {
                debug!("Unknown opaque handle");
                Err(ApiError::Unauthorized)
            }
        }
    }
}
