//! Test case domain records and write payloads.
//!
//! # Responsibility
//! - Define the case read model carried over the wire and in the store.
//! - Define creation and sparse-update payloads with their validation rules.
//!
//! # Invariants
//! - Every case belongs to exactly one suite; `suite_id` is set at creation
//!   and no patch type exposes it, so ownership is immutable by construction.
//! - `status` always holds a value; drafts without one get the queue default.

use super::suite::SuiteId;
use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a test case.
pub type CaseId = i64;

/// Status assigned to freshly created cases that did not specify one.
pub const DEFAULT_CASE_STATUS: &str = "In Queue";

/// A single test specification owned by one suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: CaseId,
    pub suite_id: SuiteId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    /// Free-text procedure for executing the case.
    pub steps: Option<String>,
    pub expected_result: Option<String>,
}

/// Creation payload for a case. The owning suite id travels separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCase {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to [`DEFAULT_CASE_STATUS`] when absent.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub steps: Option<String>,
    #[serde(default)]
    pub expected_result: Option<String>,
}

impl NewCase {
    /// Creates a draft with the given name and all optional fields unset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
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

/// Sparse update payload for a case.
///
/// Only keys present in the JSON body are applied; an explicit `null` counts
/// as supplied and clears the field. `suite_id` is intentionally not part of
/// this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CasePatch {
    #[serde(default, deserialize_with = "crate::model::patch_field")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::patch_field")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::patch_field")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::patch_field")]
    pub steps: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::patch_field")]
    pub expected_result: Option<Option<String>>,
}

impl CasePatch {
    /// Returns whether the patch supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.steps.is_none()
            && self.expected_result.is_none()
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
        if let Some(None) = &self.status {
            return Err(ValidationError::RequiredFieldCleared("status"));
        }
        Ok(())
    }
}
