//! Shippo domain objects
//!
//! Plain serde structs for the resources the client creates and lists.
//! Output-only fields are populated by the backend and skipped when a
//! value is sent back.

mod address;
mod parcel;

pub use address::{Address, ValidationMessage, ValidationResult};
pub use parcel::{
    CollectionOnDelivery, DistanceUnit, Insurance, MassUnit, Parcel, ParcelExtra, PaymentMethod,
};
