//! Opaque session handles
//!
//! A handle is pure entropy: it carries no claims and is only meaningful as a
//! lookup key into the session store.

use super::TokenError;
use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Random bytes drawn per handle before encoding
pub const OPAQUE_HANDLE_BYTES: usize = 128;

/// Draw a fresh handle from the operating system's CSPRNG
pub fn issue_opaque_handle() -> Result<String, TokenError> {
    issue_opaque_handle_with(&mut OsRng)
}

/// Draw a handle from `rng`, failing rather than falling back when the
/// source reports an error
pub fn issue_opaque_handle_with<R>(rng: &mut R) -> Result<String, TokenError>
where
    R: RngCore + CryptoRng,
{
    let mut bytes = [0u8; OPAQUE_HANDLE_BYTES];
    rng.try_fill_bytes(&mut bytes)
        .map_err(TokenError::RandomSource)?;
    Ok(URL_SAFE.encode(bytes))
}
