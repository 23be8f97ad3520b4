//! Response envelope
//!
//! Every response body, success or failure, is
//! `{code, info, data: {doc}}` and is produced by [`respond`].

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use identity_shared::Envelope;
use serde::Serialize;

/// Info string used for successful responses
pub const SUCCESS: &str = "success";

/// Write `doc` inside the envelope with `status` mirrored into `code`
pub fn respond<T: Serialize>(
    status: StatusCode,
    info: impl Into<String>,
    doc: Option<T>,
) -> Response {
    (status, Json(Envelope::new(status.as_u16(), info, doc))).into_response()
}

/// Envelope error responses that left the middleware stack without a body
///
/// Covers the 405 from method routing and the 408 from the timeout layer.
/// Headers of the original response (such as `allow`) are kept.
pub async fn envelope_bare_errors(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error())
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    let info = status
        .canonical_reason()
        .unwrap_or("error")
        .to_ascii_lowercase();
    let (mut parts, _) = response.into_parts();
    let (enveloped, body) = respond::<()>(status, info, None).into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(enveloped.headers);

    Response::from_parts(parts, body)
}
