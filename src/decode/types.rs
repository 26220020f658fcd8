//! Decoder types and traits

use crate::error::Result;
use crate::types::null_as_default;
use serde::{Deserialize, Serialize};

/// Wire shape of a paginated list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    /// Total number of objects across all pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    /// Absolute URL of the previous page, null on the first page
    pub previous: Option<String>,
    /// Absolute URL of the next page, null on the last page
    pub next: Option<String>,
    /// Objects on this page; missing or null means an empty page
    pub results: Option<Vec<T>>,
}

/// A decoded page: items plus both continuation cursors.
///
/// Null cursors are normalized to empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPage<T> {
    /// Items on the page
    pub items: Vec<T>,
    /// Cursor of the previous page, empty when none
    pub previous_token: String,
    /// Cursor of the next page, empty when this is the last page
    pub next_token: String,
    /// Total count reported by the server
    pub total_count: u64,
}

impl<T> From<PageEnvelope<T>> for DecodedPage<T> {
    fn from(envelope: PageEnvelope<T>) -> Self {
        Self {
            items: envelope.results.unwrap_or_default(),
            previous_token: envelope.previous.unwrap_or_default(),
            next_token: envelope.next.unwrap_or_default(),
            total_count: envelope.count,
        }
    }
}

/// Decodes one list-endpoint response body
pub trait PageDecoder<T>: Send + Sync {
    /// Decode a response body into items and cursors
    fn decode(&self, body: &[u8]) -> Result<DecodedPage<T>>;
}
