//! Authenticator implementation
//!
//! Applies the configured credential to outgoing request headers.

use super::types::AuthConfig;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The underlying configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Render the `Authorization` header value
    pub fn header_value(&self) -> Result<HeaderValue> {
        let token = self.config.token();
        if token.is_empty() {
            return Err(Error::auth("API token is blank"));
        }
        let mut value = HeaderValue::from_str(&format!(
            "{} {}",
            self.config.scheme(),
            token.expose()
        ))
        .map_err(|e| Error::auth(format!("API token is not a valid header value: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Apply authentication to a header map, replacing any existing
    /// `Authorization` header
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(AUTHORIZATION, self.header_value()?);
        Ok(())
    }
}
