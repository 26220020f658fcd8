//! Common types used throughout the Shippo client
//!
//! This module contains shared type definitions, serde helpers for the
//! loosely-typed fields the API emits, and small string utilities.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Backoff Type
// ============================================================================

/// Backoff strategy used by the HTTP transport between retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Numeric Bool
// ============================================================================

/// A boolean the API may send as `true`, `1`, `"1"` or `"true"`.
///
/// Always serialized back as a JSON boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct NumericBool(pub bool);

impl NumericBool {
    /// Whether the flag is set
    pub fn get(self) -> bool {
        self.0
    }
}

impl From<bool> for NumericBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl Serialize for NumericBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

impl<'de> Deserialize<'de> for NumericBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumericBoolVisitor;

        impl Visitor<'_> for NumericBoolVisitor {
            type Value = NumericBool;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean, 0/1, or a boolean-like string")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<NumericBool, E> {
                Ok(NumericBool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NumericBool, E> {
                Ok(NumericBool(v != 0))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NumericBool, E> {
                Ok(NumericBool(v != 0))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NumericBool, E> {
                match v.trim().to_ascii_lowercase().as_str() {
                    "1" | "true" | "t" | "yes" => Ok(NumericBool(true)),
                    "" | "0" | "false" | "f" | "no" => Ok(NumericBool(false)),
                    other => Err(E::custom(format!("invalid boolean string '{other}'"))),
                }
            }

            fn visit_unit<E: de::Error>(self) -> Result<NumericBool, E> {
                Ok(NumericBool(false))
            }
        }

        deserializer.deserialize_any(NumericBoolVisitor)
    }
}

// ============================================================================
// String-encoded numbers
// ============================================================================

/// Serde adapter for `f64` fields the API transmits as JSON strings
/// (`"10.5"`). Plain JSON numbers are accepted on the way in.
pub mod string_f64 {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        struct F64Visitor;

        impl Visitor<'_> for F64Visitor {
            type Value = f64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
                Ok(v)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
                Ok(v as f64)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
                Ok(v as f64)
            }

            fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
                Ok(0.0)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
                let v = v.trim();
                if v.is_empty() {
                    return Ok(0.0);
                }
                v.parse()
                    .map_err(|e| E::custom(format!("invalid number '{v}': {e}")))
            }
        }

        deserializer.deserialize_any(F64Visitor)
    }
}

/// Deserialize `null` as the type's default value.
///
/// The API sends `null` for unset string fields; use with
/// `#[serde(default, deserialize_with = "null_as_default")]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Utilities
// ============================================================================

/// Returns the first candidate that is not blank, trimmed
pub fn first_non_blank<I, S>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .find(|s| !s.is_empty())
}
