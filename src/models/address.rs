//! Address objects

use crate::error::{Error, Result};
use crate::types::{null_as_default, NumericBool};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A postal address, used as shipment sender or recipient.
///
/// Fields marked output-only are set by the backend and never sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Required when creating an address (`QUOTE` or `PURCHASE`)
    #[serde(
        rename = "object_purpose",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub purpose: String,

    /// Output only: set when the address carries every value required
    /// for purchase
    #[serde(rename = "is_complete", default, skip_serializing)]
    pub complete: bool,

    /// Output only: creation time
    #[serde(rename = "object_created", default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Output only: last update time
    #[serde(rename = "object_updated", default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Unique identifier, needed to reference the address in a shipment
    #[serde(
        rename = "object_id",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,

    /// Output only: username of the creator
    #[serde(
        rename = "object_owner",
        default,
        deserialize_with = "null_as_default",
        skip_serializing
    )]
    pub owner_username: String,

    /// Addressee name, required for purchase
    #[serde(
        rename = "name",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub addressee_name: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub company: String,

    /// First street line, 35 characters max. Required for purchase.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub street1: String,

    /// Street number; only needed separately for DHL Germany
    #[serde(
        rename = "street_no",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub street_number: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub street2: String,

    /// Accepted for USPS international and UPS shipments only
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub street3: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub city: String,

    #[serde(
        rename = "zip",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub zip_code: String,

    /// Required for US and Canadian addresses (two letter abbreviation)
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub state: String,

    /// ISO 3166-1 alpha-2 code, always required
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub country: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub phone: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub email: String,

    #[serde(
        rename = "is_residential",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub residential: Option<NumericBool>,

    /// Ask the backend to validate the address on creation
    #[serde(rename = "validate", default, skip_serializing_if = "Option::is_none")]
    pub should_validate: Option<NumericBool>,

    /// Free-form note of up to 100 characters
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub metadata: String,

    /// Output only: created with a test token
    #[serde(rename = "test", default, skip_serializing)]
    pub in_test_mode: bool,

    /// Output only: result of address validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_results: Option<ValidationResult>,
}

impl Address {
    /// Check the fields required before the address can be created
    pub fn validate(&self) -> Result<()> {
        if self.purpose.trim().is_empty() {
            return Err(Error::validation("purpose is required"));
        }
        Ok(())
    }

    /// True when the backend validated the address and found it valid
    pub fn is_valid(&self) -> bool {
        self.validation_results.as_ref().is_some_and(|r| r.valid)
    }
}

/// Outcome of address validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(rename = "is_valid", default)]
    pub valid: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<ValidationMessage>,
}

/// One message produced during validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
}
