//! Client configuration
//!
//! Holds the immutable parts of a [`Client`](crate::Client): the service base
//! URL every request and page token is checked against, and the settings used
//! to build the default HTTP transport. The API token itself is mutable at
//! runtime and lives in the client's settings, not here.

use crate::error::{Error, Result};
use crate::http::HttpTransportConfig;
use crate::types::first_non_blank;
use once_cell::sync::Lazy;
use url::Url;

/// Production endpoint of the Shippo API
pub const DEFAULT_BASE_URL: &str = "https://api.goshippo.com";

/// Environment variable consulted when no explicit token is supplied
pub const TOKEN_ENV_VAR: &str = "GOSHIPPO_TOKEN";

static PARSED_DEFAULT_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"));

/// Configuration for a [`Client`](crate::Client)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service. Page tokens must share its scheme and host.
    pub base_url: Url,
    /// Settings for the default reqwest-backed transport
    pub http: HttpTransportConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: PARSED_DEFAULT_BASE_URL.clone(),
            http: HttpTransportConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Build an absolute URL from path segments below the base URL.
    ///
    /// Each segment is percent-encoded, so an id holding `/`, `?` or `#`
    /// stays inside its segment. Shippo resource URLs carry a trailing slash
    /// (`/addresses/`), which is always added.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                Error::config(format!("base URL '{}' cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(segments);
            path.push("");
        }
        Ok(url)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    http: HttpTransportConfig,
}

impl ClientConfigBuilder {
    /// Override the service base URL (mock servers, staging)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Settings for the default HTTP transport
    pub fn http(mut self, http: HttpTransportConfig) -> Self {
        self.http = http;
        self
    }

    /// Build the config, validating the base URL
    pub fn build(self) -> Result<ClientConfig> {
        let base_url = match self.base_url {
            Some(raw) => {
                let url = Url::parse(raw.trim())?;
                if url.cannot_be_a_base() || url.host_str().is_none() {
                    return Err(Error::config(format!(
                        "base URL '{raw}' must be an absolute http(s) URL with a host"
                    )));
                }
                url
            }
            None => PARSED_DEFAULT_BASE_URL.clone(),
        };

        Ok(ClientConfig {
            base_url,
            http: self.http,
        })
    }
}

/// Resolve the API token: the first non-blank explicit token wins, otherwise
/// `GOSHIPPO_TOKEN` is read from the environment.
pub fn resolve_token<I, S>(tokens: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Some(token) = first_non_blank(tokens) {
        return Ok(token);
    }
    token_from_env()
}

/// Read the API token from `GOSHIPPO_TOKEN`
pub fn token_from_env() -> Result<String> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .and_then(|v| first_non_blank([v]))
        .ok_or(Error::MissingToken {
            env_var: TOKEN_ENV_VAR,
        })
}
