//! CLI commands and argument parsing

use crate::error::{Error, Result};
use crate::pagination::{ListRequest, Throttle};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Shippo API command-line client
#[derive(Parser, Debug)]
#[command(name = "shippo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API token (falls back to GOSHIPPO_TOKEN)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, fetch, validate and list addresses
    Address {
        #[command(subcommand)]
        command: AddressCommand,
    },

    /// Create, fetch and list parcels
    Parcel {
        #[command(subcommand)]
        command: ParcelCommand,
    },

    /// Print the known carrier tokens
    Carriers,
}

/// Address subcommands
#[derive(Subcommand, Debug)]
pub enum AddressCommand {
    /// Create an address
    Create(BodyArgs),
    /// Fetch an address by id
    Get {
        /// Address id
        id: String,
    },
    /// Validate a stored address
    Validate {
        /// Address id
        id: String,
    },
    /// List addresses
    List(ListArgs),
}

/// Parcel subcommands
#[derive(Subcommand, Debug)]
pub enum ParcelCommand {
    /// Create a parcel
    Create(BodyArgs),
    /// Fetch a parcel by id
    Get {
        /// Parcel id
        id: String,
    },
    /// List parcels
    List(ListArgs),
}

/// Object to create, as inline JSON or a file
#[derive(Args, Debug, Clone)]
pub struct BodyArgs {
    /// Inline object JSON
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,

    /// File containing the object JSON
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl BodyArgs {
    /// Parse the object from `--file` or `--json`
    pub fn load<T: DeserializeOwned>(&self) -> Result<T> {
        let raw = match (&self.file, &self.json) {
            (Some(path), _) => std::fs::read_to_string(path)?,
            (None, Some(json)) => json.clone(),
            (None, None) => return Err(Error::config("pass the object with --json or --file")),
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Listing options
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Stop after this many pages (0 = all)
    #[arg(long, default_value = "0")]
    pub max_pages: u64,

    /// Objects per page (0 = server default)
    #[arg(long, default_value = "0")]
    pub limit: u64,

    /// First page to fetch
    #[arg(long, default_value = "1")]
    pub page: u64,

    /// Resume from a next-page URL printed by an earlier listing
    #[arg(long)]
    pub page_token: Option<String>,

    /// Delay between pages in ms (0 = default 150, -1 = none)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub throttle_ms: i64,
}

impl ListArgs {
    /// Convert into a [`ListRequest`]
    pub fn to_request(&self) -> ListRequest {
        let mut request = ListRequest::new()
            .max_pages(self.max_pages)
            .limit(self.limit)
            .page(self.page)
            .throttle(Throttle::from_millis(self.throttle_ms));
        if let Some(token) = &self.page_token {
            request = request.page_token(token.clone());
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_parse_list_args() {
        let cli = Cli::parse_from([
            "shippo",
            "address",
            "list",
            "--max-pages",
            "3",
            "--limit",
            "10",
            "--throttle-ms",
            "-1",
        ]);
        let Commands::Address {
            command: AddressCommand::List(args),
        } = cli.command
        else {
            panic!("expected address list");
        };

        let request = args.to_request();
        assert_eq!(request.max_pages, 3);
        assert_eq!(request.limit_per_page, 10);
        assert_eq!(request.start_page(), 1);
        assert_eq!(request.throttle, Throttle::Disabled);
        assert_eq!(request.page_token, None);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "shippo",
            "parcel",
            "list",
            "--page-token",
            "https://api.goshippo.com/parcels/?page=2",
            "--throttle-ms",
            "20",
            "--token",
            "shippo_test_x",
            "-v",
        ]);
        assert_eq!(cli.token.as_deref(), Some("shippo_test_x"));
        assert!(cli.verbose);
        let Commands::Parcel {
            command: ParcelCommand::List(args),
        } = cli.command
        else {
            panic!("expected parcel list");
        };
        let request = args.to_request();
        assert_eq!(
            request.token(),
            Some("https://api.goshippo.com/parcels/?page=2")
        );
        assert_eq!(request.throttle, Throttle::Custom(Duration::from_millis(20)));
    }

    #[test]
    fn test_body_args_inline_json() {
        let body = BodyArgs {
            json: Some(r#"{"object_purpose":"QUOTE","country":"US"}"#.to_string()),
            file: None,
        };
        let address: crate::models::Address = body.load().unwrap();
        assert_eq!(address.purpose, "QUOTE");
        assert_eq!(address.country, "US");
    }

    #[test]
    fn test_body_args_missing() {
        let body = BodyArgs {
            json: None,
            file: None,
        };
        let result: Result<crate::models::Address> = body.load();
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
