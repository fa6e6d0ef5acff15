//! Test case use-case service.

use crate::model::case::{CaseId, CasePatch, NewCase, TestCase};
use crate::model::suite::SuiteId;
use crate::repo::case_repo::{CaseListQuery, CaseRepository};
use crate::repo::RepoResult;

/// Use-case service wrapper for case CRUD operations.
pub struct CaseService<R: CaseRepository> {
    repo: R,
}

impl<R: CaseRepository> CaseService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a case under the given suite.
    ///
    /// # Contract
    /// - Fails with a suite not-found error when the suite is missing;
    ///   nothing is persisted in that case.
    /// - Applies the queue status default when the draft omits `status`.
    pub fn add_case_to_suite(&self, suite_id: SuiteId, draft: &NewCase) -> RepoResult<TestCase> {
        self.repo.insert_case(suite_id, draft)
    }

    /// Gets one case by id.
    pub fn get_case(&self, id: CaseId) -> RepoResult<Option<TestCase>> {
        self.repo.get_case(id)
    }

    /// Lists cases using suite and substring filters, ordered by ascending id.
    pub fn list_cases(&self, query: &CaseListQuery) -> RepoResult<Vec<TestCase>> {
        self.repo.list_cases(query)
    }

    /// Applies a sparse update to an existing case. `suite_id` never changes.
    pub fn update_case(&self, id: CaseId, patch: &CasePatch) -> RepoResult<TestCase> {
        self.repo.update_case(id, patch)
    }

    /// Deletes a case by id.
    pub fn delete_case(&self, id: CaseId) -> RepoResult<()> {
        self.repo.delete_case(id)
    }
}
