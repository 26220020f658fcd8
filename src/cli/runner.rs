//! CLI runner - executes commands

use crate::catalog::Carrier;
use crate::cli::commands::{AddressCommand, Cli, Commands, ParcelCommand};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{Address, Parcel};
use crate::pagination::Pager;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Address { command } => self.address(command).await,
            Commands::Parcel { command } => self.parcel(command).await,
            Commands::Carriers => {
                for carrier in &Carrier::ALL {
                    println!("{carrier}");
                }
                Ok(())
            }
        }
    }

    /// Build a client from the global flags
    fn client(&self) -> Result<Client> {
        let mut builder = ClientConfig::builder();
        if let Some(base_url) = &self.cli.base_url {
            builder = builder.base_url(base_url.clone());
        }
        Client::with_config(builder.build()?, self.cli.token.as_deref())
    }

    async fn address(&self, command: &AddressCommand) -> Result<()> {
        let client = self.client()?;
        match command {
            AddressCommand::Create(body) => {
                let address: Address = body.load()?;
                emit(&client.create_address(&address).await?)
            }
            AddressCommand::Get { id } => emit(&client.address_by_id(id).await?),
            AddressCommand::Validate { id } => emit(&client.validate_address(id).await?),
            AddressCommand::List(args) => drain(client.list_addresses(args.to_request())?).await,
        }
    }

    async fn parcel(&self, command: &ParcelCommand) -> Result<()> {
        let client = self.client()?;
        match command {
            ParcelCommand::Create(body) => {
                let parcel: Parcel = body.load()?;
                emit(&client.create_parcel(&parcel).await?)
            }
            ParcelCommand::Get { id } => emit(&client.parcel_by_id(id).await?),
            ParcelCommand::List(args) => drain(client.list_parcels(args.to_request())?).await,
        }
    }
}

/// Print one JSON line
fn emit<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Print every page as a JSON line. Page errors go to stderr and the loop
/// keeps draining until the run closes the sequence.
async fn drain<T: Serialize>(mut pager: Pager<T>) -> Result<()> {
    let mut pages = 0u64;
    let mut items = 0usize;

    while let Some(page) = pager.next().await {
        if let Some(err) = &page.error {
            eprintln!("page #{}: {err}", page.page_number);
            continue;
        }
        debug!("Page {} carries {} items", page.page_number, page.items.len());
        pages += 1;
        items += page.items.len();
        emit(&json!({
            "page_number": page.page_number,
            "items": page.items,
            "previous_token": page.previous_token,
            "next_token": page.next_token,
        }))?;
    }

    info!("Listed {items} objects over {pages} pages");
    Ok(())
}
