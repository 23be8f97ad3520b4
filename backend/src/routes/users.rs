//! User routes
//!
//! - `POST /users/action/register`
//! - `POST /users/action/login`
//! - `GET /users/auth` (opaque handle in, signed token out via header)

use crate::auth::OpaqueToken;
use crate::envelope::{respond, SUCCESS};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, StatusCode},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use identity_shared::{LoginRequest, OpaqueTokenDoc, RegisterRequest};

/// Response header carrying the signed token from `GET /users/auth`
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/action/register", post(register))
        .route("/action/login", post(login))
        .route("/auth", get(resolve))
}

/// Register a new user
///
/// POST /users/action/register
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let view = state
        .auth()
        .register(&req.username, &req.name, req.password)
        .await?;

    Ok(respond(StatusCode::OK, SUCCESS, Some(view)))
}

/// Login with username and password
///
/// POST /users/action/login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let opaque_token = state.auth().login(&req.username, req.password).await?;

    Ok(respond(StatusCode::OK, SUCCESS, Some(OpaqueTokenDoc { opaque_token })))
}

/// Exchange the `x-opaque-token` header for the signed access token
///
/// GET /users/auth
async fn resolve(State(state): State<AppState>, token: OpaqueToken) -> ApiResult<Response> {
    let signed_token = state.auth().resolve(token.as_str()).await?;
    let value = HeaderValue::from_str(&signed_token).map_err(|e| {
        ApiError::Internal(anyhow::anyhow!("Stored token is not a header value: {}", e))
    })?;

    let mut response = respond::<()>(StatusCode::OK, SUCCESS, None);
    response.headers_mut().insert(ACCESS_TOKEN_HEADER, value);
    Ok(response)
}
