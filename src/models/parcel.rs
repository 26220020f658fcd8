//! Parcel objects

use crate::catalog::ParcelTemplate;
use crate::error::{Error, Result};
use crate::types::{null_as_default, string_f64};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A package to be shipped. Parcels cannot be changed once created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    /// Output only: `VALID` or `INVALID`
    #[serde(
        rename = "object_state",
        default,
        deserialize_with = "null_as_default",
        skip_serializing
    )]
    pub state: String,

    /// Output only: creation time
    #[serde(rename = "object_created", default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Output only: last time the backend touched the parcel, e.g. when
    /// sorting the dimensions
    #[serde(rename = "object_updated", default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Output only: identifier used when creating a shipment
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

    /// Up to 6 digits before and 4 after the decimal separator
    #[serde(default, with = "string_f64")]
    pub length: f64,

    #[serde(default, with = "string_f64")]
    pub width: f64,

    #[serde(default, with = "string_f64")]
    pub height: f64,

    /// Unit of length, width and height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,

    #[serde(default, with = "string_f64")]
    pub weight: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_unit: Option<MassUnit>,

    /// When set, the template's dimensions are used for rating instead of
    /// the ones above. Weight is unaffected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<ParcelTemplate>,

    /// Free-form note of up to 100 characters
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub metadata: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<ParcelExtra>,
}

impl Parcel {
    /// Check the fields required before the parcel can be created
    pub fn validate(&self) -> Result<()> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        if self.distance_unit.is_none() {
            return Err(Error::validation("expecting a non-blank distance unit"));
        }
        require_positive("weight", self.weight)?;
        if self.mass_unit.is_none() {
            return Err(Error::validation("expecting a non-blank mass unit"));
        }
        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::validation(format!("expecting {field} > 0.0")))
    }
}

/// Unit for parcel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "cm")]
    Centimetre,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "mm")]
    Millimetre,
    #[serde(rename = "yd")]
    Yard,
}

impl DistanceUnit {
    /// Wire symbol
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Centimetre => "cm",
            Self::Inch => "in",
            Self::Foot => "ft",
            Self::Millimetre => "mm",
            Self::Yard => "yd",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cm" => Ok(Self::Centimetre),
            "in" => Ok(Self::Inch),
            "ft" => Ok(Self::Foot),
            "mm" => Ok(Self::Millimetre),
            "yd" => Ok(Self::Yard),
            other => Err(Error::validation(format!("unknown distance unit '{other}'"))),
        }
    }
}

/// Unit for parcel weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "kg")]
    Kilogram,
}

impl MassUnit {
    /// Wire symbol
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Ounce => "oz",
            Self::Pound => "lb",
            Self::Kilogram => "kg",
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MassUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" => Ok(Self::Gram),
            "oz" => Ok(Self::Ounce),
            "lb" => Ok(Self::Pound),
            "kg" => Ok(Self::Kilogram),
            other => Err(Error::validation(format!("unknown mass unit '{other}'"))),
        }
    }
}

/// How a collect-on-delivery amount may be paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Money orders, certified cheques and similar
    SecuredFunds,
    Cash,
    #[default]
    Any,
}

/// Optional parcel services
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParcelExtra {
    /// Collect on delivery (UPS and FedEx only)
    #[serde(rename = "COD", default, skip_serializing_if = "Option::is_none")]
    pub collection_on_delivery: Option<CollectionOnDelivery>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Insurance>,
}

/// Collect-on-delivery details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionOnDelivery {
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(rename = "currency", default, deserialize_with = "null_as_default")]
    pub currency_code: String,
    /// Defaults to [`PaymentMethod::Any`] on the backend when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

/// Insurance details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(rename = "currency", default, deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}
