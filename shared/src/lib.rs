//! Identity Service Shared Library
//!
//! Wire types shared between the backend and its clients.

pub mod types;

// Re-export commonly used items
pub use types::*;
