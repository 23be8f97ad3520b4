//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The store is constructed by the caller and injected here; nothing in
//! the crate reaches for a global connection.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::CredentialStore;
use crate::services::AuthService;
use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// All fields are `Arc`-backed, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and resolution over the injected store
    pub auth: AuthService,
    /// Prometheus render handle, present when a recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    ///
    /// Fails when no JWT secret is configured. Derives the signing keys
    /// once, so call this at startup only.
    pub fn new(store: Arc<dyn CredentialStore>, config: AppConfig) -> Result<Self> {
        let jwt = JwtService::new(config.jwt_secret()?, config.jwt.access_token_expiry_secs);

        Ok(Self {
            auth: AuthService::new(store, jwt),
            metrics: None,
        })
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the auth service
    #[inline]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }
}
