//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `address create|get|validate|list` - Address endpoints
//! - `parcel create|get|list` - Parcel endpoints
//! - `carriers` - Known carrier tokens
//!
//! Objects and pages are written to stdout as JSON lines; logs go to stderr.

mod commands;
mod runner;

pub use commands::{AddressCommand, BodyArgs, Cli, Commands, ListArgs, ParcelCommand};
pub use runner::Runner;
