//! Domain model for test suites and their owned cases.
//!
//! # Responsibility
//! - Define the canonical Suite/Case records returned by the store.
//! - Define draft and sparse-patch payload types for write paths.
//!
//! # Invariants
//! - `id` values are store-assigned and never reused.
//! - Patch types distinguish an omitted key from an explicit JSON `null`.

use serde::{Deserialize, Deserializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod case;
pub mod suite;

/// Payload validation failure raised before any SQL runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required name was missing or blank.
    BlankName,
    /// A patch tried to null out a field that must stay set.
    RequiredFieldCleared(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must be a non-empty string"),
            Self::RequiredFieldCleared(field) => {
                write!(f, "field `{field}` is required and cannot be set to null")
            }
        }
    }
}

impl Error for ValidationError {}

/// Deserializer for sparse patch fields.
///
/// Combined with `#[serde(default)]`, an omitted key stays `None` while an
/// explicit `null` becomes `Some(None)`, so "absent" and "clear" survive
/// deserialization as distinct states.
pub(crate) fn patch_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
