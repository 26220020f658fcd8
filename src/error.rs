//! Error types for the Shippo client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Shippo client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No API token supplied and {env_var} is not set in the environment")]
    MissingToken { env_var: &'static str },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} {reason}: {body}")]
    HttpStatus {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Invalid page token '{token}': {source}")]
    InvalidPageToken {
        token: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Untrusted page token: {}", mismatches.join("; "))]
    UntrustedPageToken { mismatches: Vec<String> },

    #[error("Already closed")]
    AlreadyClosed,

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Expecting a non-empty {what} id")]
    EmptyId { what: &'static str },

    #[error("Received a blank {what} from the backend")]
    BlankResponse { what: &'static str },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status");
        Self::HttpStatus {
            status,
            reason: reason.to_string(),
            body: body.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if this error was raised before any request was sent
    pub fn is_fatal_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidPageToken { .. }
                | Error::UntrustedPageToken { .. }
                | Error::Validation { .. }
                | Error::EmptyId { .. }
        )
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the Shippo client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404 Not Found: Not found");

        let err = Error::EmptyId { what: "address" };
        assert_eq!(err.to_string(), "Expecting a non-empty address id");

        assert_eq!(Error::AlreadyClosed.to_string(), "Already closed");
    }

    #[test]
    fn test_untrusted_token_lists_every_mismatch() {
        let err = Error::UntrustedPageToken {
            mismatches: vec![
                "got host \"evil.example\" want host \"api.goshippo.com\"".to_string(),
                "got scheme \"http\" want scheme \"https\"".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("evil.example"));
        assert!(msg.contains("got scheme \"http\""));
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(401, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::AlreadyClosed.is_retryable());
    }

    #[test]
    fn test_is_fatal_input() {
        assert!(Error::UntrustedPageToken { mismatches: vec![] }.is_fatal_input());
        assert!(Error::validation("purpose is required").is_fatal_input());
        assert!(!Error::http_status(500, "").is_fatal_input());
    }
}
