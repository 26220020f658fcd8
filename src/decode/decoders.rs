//! Decoder implementations

use super::types::{DecodedPage, PageDecoder, PageEnvelope};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// JSON decoder for the `{count, previous, next, results}` envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPageDecoder;

impl JsonPageDecoder {
    /// Create a new JSON page decoder
    pub fn new() -> Self {
        Self
    }
}

impl<T: DeserializeOwned> PageDecoder<T> for JsonPageDecoder {
    fn decode(&self, body: &[u8]) -> Result<DecodedPage<T>> {
        let envelope: PageEnvelope<T> = serde_json::from_slice(body).map_err(|e| Error::Decode {
            message: format!("Failed to parse page JSON: {e}"),
        })?;
        Ok(envelope.into())
    }
}

/// Decode a single object, rejecting a body that decodes to the blank value.
///
/// `what` names the object in the error (`"address"`, `"parcel"`).
pub fn decode_object<T>(body: &[u8], what: &'static str) -> Result<T>
where
    T: DeserializeOwned + Default + PartialEq,
{
    let value: T = serde_json::from_slice(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse {what} JSON: {e}"),
    })?;
    if value == T::default() {
        return Err(Error::BlankResponse { what });
    }
    Ok(value)
}
