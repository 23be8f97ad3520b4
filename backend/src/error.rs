//! Application error handling
//!
//! Every failure at the service boundary becomes an [`ApiError`], which is
//! converted to an HTTP status plus the standard envelope with `doc: null`.
//! Internal details are logged, never returned to the client.

use crate::auth::TokenError;
use crate::envelope::respond;
use crate::repositories::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidCredentials => StatusCode::FORBIDDEN,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Token(_) | ApiError::Store(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let info = match &self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                msg.clone()
            }
            ApiError::InvalidCredentials => "wrong username/password".to_string(),
            ApiError::Unauthorized => "unauthorized".to_string(),
            ApiError::Token(err) => {
                error!("Token error: {:?}", err);
                "internal server error".to_string()
            }
            ApiError::Store(err) => {
                error!("Store error: {:?}", err);
                "internal server error".to_string()
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                "internal server error".to_string()
            }
        };

        respond::<()>(self.status(), info, None)
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[rstest]
    #[case(ApiError::Validation("bad body".to_string()), StatusCode::BAD_REQUEST)]
    #[case(ApiError::NotFound("user not found".to_string()), StatusCode::NOT_FOUND)]
    #[case(ApiError::InvalidCredentials, StatusCode::FORBIDDEN)]
    #[case(ApiError::Unauthorized, StatusCode::UNAUTHORIZED)]
    #[case(ApiError::Conflict("username already taken".to_string()), StatusCode::CONFLICT)]
    #[case(ApiError::Store(StoreError::UniqueViolation), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_error_status(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.into_response().status(), expected);
    }

    #[tokio::test]
    async fn test_error_body_is_enveloped() {
        let value = body_json(ApiError::Unauthorized.into_response()).await;

        assert_eq!(value["code"], 401);
        assert_eq!(value["info"], "unauthorized");
        assert!(value["data"]["doc"].is_null());
    }

    #[tokio::test]
    async fn test_internal_details_not_leaked() {
        let error = ApiError::Internal(anyhow::anyhow!("connection refused to 10.0.0.5:5432"));
        let value = body_json(error.into_response()).await;

        assert_eq!(value["code"], 500);
        assert_eq!(value["info"], "internal server error");
    }
}
