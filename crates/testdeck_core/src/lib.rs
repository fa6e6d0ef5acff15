//! Core domain logic for TestDeck.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::case::{CaseId, CasePatch, NewCase, TestCase, DEFAULT_CASE_STATUS};
pub use model::suite::{NewSuite, Suite, SuiteCaseCount, SuiteId, SuitePatch, SuiteWithCases};
pub use model::ValidationError;
pub use repo::case_repo::{CaseListQuery, CaseRepository, SqliteCaseRepository};
pub use repo::suite_repo::{SqliteSuiteRepository, SuiteRepository};
pub use repo::{RepoError, RepoResult};
pub use service::case_service::CaseService;
pub use service::suite_service::SuiteService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
