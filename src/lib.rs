// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # shippo-client
//!
//! An async client for the Shippo shipping API: typed addresses and parcels,
//! token authentication, and a cancellable, throttled page iterator for the
//! list endpoints.
//!
//! ## Features
//!
//! - **Addresses & Parcels**: create, fetch, validate and list
//! - **Background Pagination**: one task per listing, pages handed over one at
//!   a time, never fetched ahead of the consumer
//! - **Cancellation & Throttling**: stop a listing between pages; default
//!   150 ms delay, configurable or disabled
//! - **Cursor Checks**: page tokens must stay on the configured origin
//! - **Swappable Settings**: rotate the token or transport on a live client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shippo_client::{Client, ListRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Token from the argument, or GOSHIPPO_TOKEN
//!     let client = Client::from_env()?;
//!
//!     let mut pager = client.list_addresses(ListRequest::new().max_pages(2))?;
//!     while let Some(page) = pager.next().await {
//!         match page.error {
//!             Some(err) => eprintln!("page {}: {err}", page.page_number),
//!             None => println!("{} addresses", page.items.len()),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            Client                               │
//! │  create_* / *_by_id / validate_address      list_* → Pager<T>   │
//! └─────────────────────────────────────────────────────────────────┘
//!          │                                         │
//!          │                          ┌──────────────┴──────────────┐
//!          │                          │  Pagination (tokio task)    │
//!          │                          │  fetch → decode → hand off  │
//!          │                          │  throttle ⟷ CancelHandle    │
//!          │                          └──────────────┬──────────────┘
//! ┌────────┴──────────┬──────────────────┬──────────┴──────────────┐
//! │  Settings (RwLock)│      Auth        │        Decode           │
//! ├───────────────────┼──────────────────┼─────────────────────────┤
//! │  Transport        │  ShippoToken     │  {count, previous,      │
//! │  (reqwest, retry, │  Bearer          │   next, results}        │
//! │   rate limit)     │                  │                         │
//! └───────────────────┴──────────────────┴─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and serde helpers
pub mod types;

/// API token authentication
pub mod auth;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Background pagination with cancellation and throttling
pub mod pagination;

/// List response decoding
pub mod decode;

/// Client configuration and token resolution
pub mod config;

/// The API client and its endpoints
pub mod client;

/// Address and parcel objects
pub mod models;

/// Carrier, service level and parcel template identifiers
pub mod catalog;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL, TOKEN_ENV_VAR};
pub use models::{Address, Parcel};
pub use pagination::{CancelHandle, ListRequest, Page, Pager, Pages, Throttle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
