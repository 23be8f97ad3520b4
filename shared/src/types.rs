//! API request and response types

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Response Envelope
// ============================================================================

/// Response envelope written for every response, success or failure
///
/// ```json
/// {"code": 200, "info": "success", "data": {"doc": {...}}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub info: String,
    pub data: EnvelopeData<T>,
}

/// Payload wrapper; `doc` is `null` for errors and payload-free successes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeData<T> {
    pub doc: Option<T>,
}

impl<T> Envelope<T> {
    pub fn new(code: u16, info: impl Into<String>, doc: Option<T>) -> Self {
        Self {
            code,
            info: info.into(),
            data: EnvelopeData { doc },
        }
    }
}

// ============================================================================
// User Types
// ============================================================================

/// Registration request
///
/// Any body that decodes is accepted; uniqueness of `username` is the only
/// rule, and the store decides it.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub name: String,
    pub password: SecretString,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: SecretString,
}

/// Public view of a user; the password hash never leaves the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublicView {
    pub id: Uuid,
    pub name: String,
    pub username: String,
}

/// Login response document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueTokenDoc {
    #[serde(rename = "opaqueToken")]
    pub opaque_token: String,
}
