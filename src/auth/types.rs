//! Auth configuration types

use std::fmt;

/// Prefix Shippo puts on test-mode API tokens
const TEST_TOKEN_PREFIX: &str = "shippo_test_";

/// An API credential. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a raw token, trimming surrounding whitespace
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    /// The raw token value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when the token is blank
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Objects created with a test token are flagged `test: true` by the API
    pub fn is_test_mode(&self) -> bool {
        self.0.starts_with(TEST_TOKEN_PREFIX)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "ApiToken({visible}***)")
    }
}

impl From<&str> for ApiToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ApiToken {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Authentication configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthConfig {
    /// `Authorization: ShippoToken <token>`, the API key scheme
    ShippoToken {
        /// The API key
        token: ApiToken,
    },

    /// `Authorization: Bearer <token>`, for OAuth access tokens
    Bearer {
        /// The access token
        token: ApiToken,
    },
}

impl AuthConfig {
    /// API key authentication
    pub fn shippo_token(token: impl Into<ApiToken>) -> Self {
        Self::ShippoToken {
            token: token.into(),
        }
    }

    /// OAuth bearer authentication
    pub fn bearer(token: impl Into<ApiToken>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// The credential regardless of scheme
    pub fn token(&self) -> &ApiToken {
        match self {
            Self::ShippoToken { token } | Self::Bearer { token } => token,
        }
    }

    /// Scheme word placed before the token in the header
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::ShippoToken { .. } => "ShippoToken",
            Self::Bearer { .. } => "Bearer",
        }
    }
}
