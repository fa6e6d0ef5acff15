//! Test case repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `test_cases` storage.
//! - Own the list filter logic (suite restriction + substring search).
//!
//! # Invariants
//! - Write paths validate payloads before SQL mutations.
//! - A case is only created under an existing suite; the existence check
//!   precedes the insert and a failure persists nothing.
//! - `suite_id` is never touched by updates.

use crate::model::case::{CaseId, CasePatch, NewCase, TestCase, DEFAULT_CASE_STATUS};
use crate::model::suite::SuiteId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const CASE_SELECT_SQL: &str = "SELECT
    id,
    suite_id,
    name,
    description,
    status,
    steps,
    expected_result
FROM test_cases";

/// Filter options for listing cases.
///
/// `text` matches case-insensitively as a literal substring against name or
/// description; blank text is ignored.
#[derive(Debug, Clone, Default)]
pub struct CaseListQuery {
    pub suite_id: Option<SuiteId>,
    pub text: Option<String>,
}

/// Repository interface for case CRUD operations.
pub trait CaseRepository {
    fn insert_case(&self, suite_id: SuiteId, draft: &NewCase) -> RepoResult<TestCase>;
    fn get_case(&self, id: CaseId) -> RepoResult<Option<TestCase>>;
    fn list_cases(&self, query: &CaseListQuery) -> RepoResult<Vec<TestCase>>;
    fn update_case(&self, id: CaseId, patch: &CasePatch) -> RepoResult<TestCase>;
    fn delete_case(&self, id: CaseId) -> RepoResult<()>;
}

/// SQLite-backed case repository.
pub struct SqliteCaseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCaseRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn suite_exists(&self, suite_id: SuiteId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM test_suites WHERE id = ?1);",
            params![suite_id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn require_case(&self, id: CaseId) -> RepoResult<TestCase> {
        self.get_case(id)?.ok_or(RepoError::CaseNotFound(id))
    }
}

impl CaseRepository for SqliteCaseRepository<'_> {
    fn insert_case(&self, suite_id: SuiteId, draft: &NewCase) -> RepoResult<TestCase> {
        draft.validate()?;

        if !self.suite_exists(suite_id)? {
            return Err(RepoError::SuiteNotFound(suite_id));
        }

        self.conn.execute(
            "INSERT INTO test_cases (
                suite_id,
                name,
                description,
                status,
                steps,
                expected_result
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                suite_id,
                draft.name.as_str(),
                draft.description.as_deref(),
                draft.status.as_deref().unwrap_or(DEFAULT_CASE_STATUS),
                draft.steps.as_deref(),
                draft.expected_result.as_deref(),
            ],
        )?;

        self.require_case(self.conn.last_insert_rowid())
    }

    fn get_case(&self, id: CaseId) -> RepoResult<Option<TestCase>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CASE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_case_row(row)?));
        }

        Ok(None)
    }

    fn list_cases(&self, query: &CaseListQuery) -> RepoResult<Vec<TestCase>> {
        let mut sql = format!("{CASE_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(suite_id) = query.suite_id {
            sql.push_str(" AND suite_id = ?");
            bind_values.push(Value::Integer(suite_id));
        }

        if let Some(pattern) = build_like_pattern(query.text.as_deref()) {
            sql.push_str(
                " AND (LOWER(name) LIKE ? ESCAPE '\\' OR LOWER(description) LIKE ? ESCAPE '\\')",
            );
            bind_values.push(Value::Text(pattern.clone()));
            bind_values.push(Value::Text(pattern));
        }

        sql.push_str(" ORDER BY id ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut cases = Vec::new();

        while let Some(row) = rows.next()? {
            cases.push(parse_case_row(row)?);
        }

        Ok(cases)
    }

    fn update_case(&self, id: CaseId, patch: &CasePatch) -> RepoResult<TestCase> {
        patch.validate()?;

        if patch.is_empty() {
            return self.require_case(id);
        }

        let mut assignments = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(Some(name)) = &patch.name {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.clone()));
        }

        if let Some(Some(status)) = &patch.status {
            assignments.push("status = ?");
            bind_values.push(Value::Text(status.clone()));
        }

        for (column, field) in [
            ("description = ?", &patch.description),
            ("steps = ?", &patch.steps),
            ("expected_result = ?", &patch.expected_result),
        ] {
            if let Some(value) = field {
                assignments.push(column);
                bind_values.push(match value {
                    Some(text) => Value::Text(text.clone()),
                    None => Value::Null,
                });
            }
        }

        let sql = format!(
            "UPDATE test_cases SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        bind_values.push(Value::Integer(id));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(RepoError::CaseNotFound(id));
        }

        self.require_case(id)
    }

    fn delete_case(&self, id: CaseId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM test_cases WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::CaseNotFound(id));
        }

        Ok(())
    }
}

fn parse_case_row(row: &Row<'_>) -> RepoResult<TestCase> {
    Ok(TestCase {
        id: row.get("id")?,
        suite_id: row.get("suite_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        status: row.get("status")?,
        steps: row.get("steps")?,
        expected_result: row.get("expected_result")?,
    })
}

/// Builds a lowercase LIKE pattern with `%`/`_`/`\` escaped, so the search
/// text always matches literally.
fn build_like_pattern(text: Option<&str>) -> Option<String> {
    let trimmed = text?.trim();
    if trimmed.is_empty() {
        return None;
    }

    let escaped = trimmed
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    Some(format!("%{escaped}%"))
}
