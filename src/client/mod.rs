//! Shippo API client
//!
//! [`Client`] is cheap to clone and safe to share between tasks. Its base URL
//! and transport settings are fixed at construction; the API token and the
//! transport itself live behind a read-write lock and can be swapped while
//! requests and listings are in flight. A request takes the read lock only
//! long enough to copy what it needs; no lock is held across network I/O.

mod addresses;
mod parcels;

use crate::auth::{ApiToken, AuthConfig, Authenticator};
use crate::config::{resolve_token, ClientConfig};
use crate::decode::decode_object;
use crate::error::{Error, Result};
use crate::http::{HttpTransport, Transport, TransportRequest, TransportResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Seconds to wait after a 429 that carries no `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Client for the Shippo REST API
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    settings: RwLock<Settings>,
}

/// The mutable part of the client
#[derive(Clone)]
struct Settings {
    auth: Authenticator,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client for the production API.
    ///
    /// The first non-blank token wins; with none, `GOSHIPPO_TOKEN` is read
    /// from the environment.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(ClientConfig::default(), tokens)
    }

    /// Create a client using only `GOSHIPPO_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::new(std::iter::empty::<&str>())
    }

    /// Create a client with custom configuration and the reqwest transport
    pub fn with_config<I, S>(config: ClientConfig, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let token = resolve_token(tokens)?;
        let transport = Arc::new(HttpTransport::with_config(config.http.clone())?);
        Ok(Self::with_transport(config, token, transport))
    }

    /// Create a client around an existing transport
    pub fn with_transport(
        config: ClientConfig,
        token: impl Into<ApiToken>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let settings = Settings {
            auth: Authenticator::new(AuthConfig::shippo_token(token)),
            transport,
        };
        Self {
            inner: Arc::new(ClientInner {
                config,
                settings: RwLock::new(settings),
            }),
        }
    }

    /// Immutable configuration
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Replace the API token used by subsequent requests
    pub async fn set_api_token(&self, token: impl Into<ApiToken>) {
        self.set_auth(AuthConfig::shippo_token(token)).await;
    }

    /// Replace the credential, e.g. with an OAuth bearer token
    pub async fn set_auth(&self, auth: AuthConfig) {
        self.inner.settings.write().await.auth = Authenticator::new(auth);
    }

    /// Replace the transport used by subsequent requests
    pub async fn set_transport(&self, transport: Arc<dyn Transport>) {
        self.inner.settings.write().await.transport = transport;
    }

    /// The credential currently in use
    pub async fn auth(&self) -> AuthConfig {
        self.inner.settings.read().await.auth.config().clone()
    }

    /// Authenticate and send one request; non-2xx statuses become errors
    pub(crate) async fn execute(&self, mut request: TransportRequest) -> Result<TransportResponse> {
        let Settings { auth, transport } = self.inner.settings.read().await.clone();
        auth.apply(&mut request.headers)?;

        let method = request.method.clone();
        let url = request.url.clone();
        let response = transport.send(request).await?;
        debug!("{method} {url} -> {}", response.status.as_u16());

        if response.is_success() {
            return Ok(response);
        }
        if response.status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited {
                retry_after_seconds: response.retry_after().unwrap_or(DEFAULT_RETRY_AFTER_SECS),
            });
        }
        Err(Error::http_status(response.status.as_u16(), response.text()))
    }

    /// GET an object at the given path segments below the base URL
    async fn get_object<T>(&self, path: &[&str], what: &'static str) -> Result<T>
    where
        T: DeserializeOwned + Default + PartialEq,
    {
        let url = self.inner.config.endpoint(path)?;
        let response = self.execute(TransportRequest::get(url)).await?;
        decode_object(&response.body, what)
    }

    /// POST a JSON body and decode the created object
    async fn post_object<B, T>(&self, path: &[&str], body: &B, what: &'static str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default + PartialEq,
    {
        let url = self.inner.config.endpoint(path)?;
        let payload = serde_json::to_vec(body)?;
        let response = self
            .execute(TransportRequest::post_json(url, payload))
            .await?;
        decode_object(&response.body, what)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Trim an object id, rejecting blank ones before any request is made.
///
/// `.` and `..` are rejected too: they are not ids and would be dropped
/// from the URL path.
fn require_id<'a>(id: &'a str, what: &'static str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Error::EmptyId { what });
    }
    if matches!(id, "." | "..") {
        return Err(Error::validation(format!("'{id}' is not a valid {what} id")));
    }
    Ok(id)
}
