//! Parcel endpoints

use super::{require_id, Client};
use crate::error::Result;
use crate::models::Parcel;
use crate::pagination::{start_listing, ListRequest, Pager};

const RESOURCE: &str = "parcels";

impl Client {
    /// Create a parcel after checking its dimensions, weight and units
    pub async fn create_parcel(&self, parcel: &Parcel) -> Result<Parcel> {
        parcel.validate()?;
        self.post_object(&[RESOURCE], parcel, "parcel").await
    }

    /// Fetch a parcel by id
    pub async fn parcel_by_id(&self, id: &str) -> Result<Parcel> {
        let id = require_id(id, "parcel")?;
        self.get_object(&[RESOURCE, id], "parcel").await
    }

    /// List parcels page by page on a background task
    pub fn list_parcels(&self, request: ListRequest) -> Result<Pager<Parcel>> {
        start_listing(self, RESOURCE, request)
    }
}
