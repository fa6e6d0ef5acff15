//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for suites and cases.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes validate payloads before any SQL mutation.
//! - Repository APIs return semantic errors (not-found, duplicate name) in
//!   addition to DB transport errors.
//! - A failed operation leaves the store untouched.

use crate::db::DbError;
use crate::model::case::CaseId;
use crate::model::suite::SuiteId;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod case_repo;
pub mod suite_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for suite/case persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    SuiteNotFound(SuiteId),
    CaseNotFound(CaseId),
    DuplicateSuiteName(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::SuiteNotFound(id) => write!(f, "suite not found: {id}"),
            Self::CaseNotFound(id) => write!(f, "test case not found: {id}"),
            Self::DuplicateSuiteName(name) => {
                write!(f, "a suite named `{name}` already exists")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::SuiteNotFound(_) | Self::CaseNotFound(_) | Self::DuplicateSuiteName(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
