//! Authentication module
//!
//! Argon2 password hashing, HS256-signed access tokens, and random opaque
//! handles that stand in for the signed token on the client side.

mod error;
mod extract;
mod jwt;
mod opaque;
mod password;

pub use error::TokenError;
pub use extract::{OpaqueToken, OPAQUE_TOKEN_HEADER};
pub use jwt::{Claims, JwtService};
pub use opaque::{issue_opaque_handle, issue_opaque_handle_with, OPAQUE_HANDLE_BYTES};
pub use password::PasswordService;
