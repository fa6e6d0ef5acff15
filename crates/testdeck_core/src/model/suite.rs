//! Suite domain records and write payloads.
//!
//! # Responsibility
//! - Define the suite read model and the suites-with-counts projection.
//! - Define creation and sparse-update payloads with their validation rules.
//!
//! # Invariants
//! - `name` is required and unique across suites (case-sensitive).
//! - A patch never clears `name`; clearing `description` is allowed.

use super::case::TestCase;
use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a suite.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SuiteId = i64;

/// A named grouping that owns zero or more test cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    pub id: SuiteId,
    pub name: String,
    pub description: Option<String>,
}

/// A suite together with its owned cases, ordered by ascending case id.
///
/// Serialized with a `test_cases` array to match the service wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteWithCases {
    pub id: SuiteId,
    pub name: String,
    pub description: Option<String>,
    pub test_cases: Vec<TestCase>,
}

impl SuiteWithCases {
    /// Combines a suite record with its already-loaded cases.
    pub fn new(suite: Suite, test_cases: Vec<TestCase>) -> Self {
        Self {
            id: suite.id,
            name: suite.name,
            description: suite.description,
            test_cases,
        }
    }
}

/// One row of the suites-with-counts aggregation.
///
/// Suites without any cases are included with `case_count == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteCaseCount {
    pub id: SuiteId,
    pub name: String,
    pub description: Option<String>,
    pub case_count: i64,
}

/// Creation payload for a suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSuite {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewSuite {
    /// Creates a draft with the given name and no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Checks required-field rules before the draft reaches the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(())
    }
}

/// Sparse update payload for a suite.
///
/// Only keys present in the JSON body are applied. A key carrying an explicit
/// `null` counts as supplied and clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SuitePatch {
    #[serde(default, deserialize_with = "crate::model::patch_field")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::patch_field")]
    pub description: Option<Option<String>>,
}

impl SuitePatch {
    /// Returns whether the patch supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Checks that supplied fields satisfy required-field rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(None) => return Err(ValidationError::RequiredFieldCleared("name")),
            Some(Some(name)) if name.trim().is_empty() => {
                return Err(ValidationError::BlankName);
            }
            _ => {}
        }
        Ok(())
    }
}
