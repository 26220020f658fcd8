//! Carrier, service level, and parcel template identifiers
//!
//! Each identifier is a transparent string newtype with associated constants
//! for the values the service publishes. Values the constants do not cover
//! (new carriers, account-specific templates) still deserialize and
//! round-trip unchanged.

mod carriers;
mod parcel_templates;
mod service_levels;

pub use carriers::Carrier;
pub use parcel_templates::ParcelTemplate;
pub use service_levels::ServiceLevel;

/// Defines a string identifier newtype with the shared conversions.
macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(std::borrow::Cow<'static, str>);

        impl $name {
            /// Identifier backed by a static string
            pub const fn from_static(id: &'static str) -> Self {
                Self(std::borrow::Cow::Borrowed(id))
            }

            /// The wire identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(std::borrow::Cow::Owned(id))
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(std::borrow::Cow::Owned(id.to_string()))
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(id: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(id))
            }
        }
    };
}

pub(crate) use catalog_id;
