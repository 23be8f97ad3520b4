//! Prometheus exposition endpoint

use crate::envelope::respond;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Render all recorded metrics in the Prometheus text format
pub async fn render(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => respond::<()>(StatusCode::NOT_FOUND, "metrics disabled", None),
    }
}
