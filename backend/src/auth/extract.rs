//! Opaque token extractor
//!
//! Reads the `x-opaque-token` header. A missing or non-UTF-8 header yields
//! `OpaqueToken(None)`; deciding what that means is left to the session
//! exchange, which rejects it before touching the store.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Header carrying the opaque handle issued at login
pub const OPAQUE_TOKEN_HEADER: &str = "x-opaque-token";

#[derive(Debug, Clone, Default)]
pub struct OpaqueToken(pub Option<String>);

impl OpaqueToken {
    /// The handle, or `""` when the header was absent
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for OpaqueToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(OPAQUE_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(OpaqueToken(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};

    async fn extract(request: Request<()>) -> OpaqueToken {
        let (mut parts, _) = request.into_parts();
        OpaqueToken::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_header_present() {
        let request = Request::builder()
            .header(OPAQUE_TOKEN_HEADER, "abc-_=")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await.as_str(), "abc-_=");
    }

    #[tokio::test]
    async fn test_header_missing_is_empty() {
        let token = extract(Request::builder().body(()).unwrap()).await;
        assert!(token.0.is_none());
        assert_eq!(token.as_str(), "");
    }

    #[tokio::test]
    async fn test_non_utf8_header_is_empty() {
        let mut request = Request::builder().body(()).unwrap();
        request.headers_mut().insert(
            OPAQUE_TOKEN_HEADER,
            HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap(),
        );

        assert!(extract(request).await.0.is_none());
    }
}
