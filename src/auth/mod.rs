//! Authentication module
//!
//! Supports: ShippoToken (API key) and Bearer (OAuth access token)
//!
//! The `Authenticator` turns an `AuthConfig` into the `Authorization` header
//! attached to every outgoing request.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{ApiToken, AuthConfig};
