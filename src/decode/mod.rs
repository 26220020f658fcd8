//! Response decoder module
//!
//! Turns response bodies into typed values.
//!
//! # Overview
//!
//! List endpoints answer with a `{count, previous, next, results}` envelope
//! which [`JsonPageDecoder`] unpacks into a [`DecodedPage`]. Single-object
//! endpoints are decoded with [`decode_object`], which also rejects the blank
//! objects the backend occasionally returns for unknown ids.

mod decoders;
mod types;

pub use decoders::{decode_object, JsonPageDecoder};
pub use types::{DecodedPage, PageDecoder, PageEnvelope};
