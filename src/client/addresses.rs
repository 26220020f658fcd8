//! Address endpoints

use super::{require_id, Client};
use crate::error::Result;
use crate::models::Address;
use crate::pagination::{start_listing, ListRequest, Pager};

const RESOURCE: &str = "addresses";

impl Client {
    /// Create an address. The purpose must be set.
    pub async fn create_address(&self, address: &Address) -> Result<Address> {
        address.validate()?;
        self.post_object(&[RESOURCE], address, "address").await
    }

    /// Fetch an address by id
    pub async fn address_by_id(&self, id: &str) -> Result<Address> {
        let id = require_id(id, "address")?;
        self.get_object(&[RESOURCE, id], "address").await
    }

    /// Validate a stored address; the result is in
    /// [`Address::validation_results`]
    pub async fn validate_address(&self, id: &str) -> Result<Address> {
        let id = require_id(id, "address")?;
        self.get_object(&[RESOURCE, id, "validate"], "address")
            .await
    }

    /// List addresses page by page on a background task
    pub fn list_addresses(&self, request: ListRequest) -> Result<Pager<Address>> {
        start_listing(self, RESOURCE, request)
    }
}
