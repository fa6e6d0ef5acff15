//! Suite use-case service.

use crate::model::suite::{NewSuite, Suite, SuiteCaseCount, SuiteId, SuitePatch, SuiteWithCases};
use crate::repo::case_repo::{CaseListQuery, CaseRepository};
use crate::repo::suite_repo::SuiteRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for suite CRUD operations.
pub struct SuiteService<R: SuiteRepository> {
    repo: R,
}

impl<R: SuiteRepository> SuiteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new suite.
    ///
    /// # Contract
    /// - Rejects blank names and duplicate names without mutating the store.
    /// - Returns the stored record with its assigned id.
    pub fn create_suite(&self, draft: &NewSuite) -> RepoResult<Suite> {
        self.repo.insert_suite(draft)
    }

    /// Gets one suite by id, without case detail.
    pub fn get_suite(&self, id: SuiteId) -> RepoResult<Option<Suite>> {
        self.repo.get_suite(id)
    }

    /// Gets one suite together with its cases ordered by ascending case id.
    ///
    /// The cases are materialized on demand through the case repository; the
    /// suite record itself carries no live back-reference.
    pub fn get_suite_with_cases<C: CaseRepository>(
        &self,
        cases: &C,
        id: SuiteId,
    ) -> RepoResult<Option<SuiteWithCases>> {
        let Some(suite) = self.repo.get_suite(id)? else {
            return Ok(None);
        };

        let owned = cases.list_cases(&CaseListQuery {
            suite_id: Some(id),
            text: None,
        })?;

        Ok(Some(SuiteWithCases::new(suite, owned)))
    }

    /// Lists all suites ordered by ascending id, without case detail.
    pub fn list_suites(&self) -> RepoResult<Vec<Suite>> {
        self.repo.list_suites()
    }

    /// Lists all suites with their case counts (zero-case suites included).
    pub fn list_suites_with_counts(&self) -> RepoResult<Vec<SuiteCaseCount>> {
        self.repo.list_suites_with_counts()
    }

    /// Applies a sparse update to an existing suite.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_suite(&self, id: SuiteId, patch: &SuitePatch) -> RepoResult<Suite> {
        self.repo.update_suite(id, patch)
    }

    /// Deletes a suite and, through the cascade, all of its cases.
    pub fn delete_suite(&self, id: SuiteId) -> RepoResult<()> {
        self.repo.delete_suite(id)
    }
}
