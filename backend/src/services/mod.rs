//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the credential store and the token issuers.

pub mod session;
pub mod user;

pub use session::SessionExchange;
pub use user::AuthService;
