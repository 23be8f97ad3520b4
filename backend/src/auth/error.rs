use thiserror::Error;

/// Failures while minting or checking tokens
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("Random source failed: {0}")]
    RandomSource(#[source] rand::Error),
}
