//! Suite repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `test_suites` storage.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate payloads before SQL mutations.
//! - Duplicate names are rejected without creating a row.
//! - Deleting a suite removes its owned cases in the same statement via the
//!   `ON DELETE CASCADE` foreign key.

use crate::model::suite::{NewSuite, Suite, SuiteCaseCount, SuiteId, SuitePatch};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const SUITE_SELECT_SQL: &str = "SELECT id, name, description FROM test_suites";

/// Repository interface for suite CRUD operations.
pub trait SuiteRepository {
    fn insert_suite(&self, draft: &NewSuite) -> RepoResult<Suite>;
    fn get_suite(&self, id: SuiteId) -> RepoResult<Option<Suite>>;
    fn list_suites(&self) -> RepoResult<Vec<Suite>>;
    fn list_suites_with_counts(&self) -> RepoResult<Vec<SuiteCaseCount>>;
    fn update_suite(&self, id: SuiteId, patch: &SuitePatch) -> RepoResult<Suite>;
    fn delete_suite(&self, id: SuiteId) -> RepoResult<()>;
}

/// SQLite-backed suite repository.
pub struct SqliteSuiteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSuiteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM test_suites WHERE name = ?1);",
            params![name],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn require_suite(&self, id: SuiteId) -> RepoResult<Suite> {
        self.get_suite(id)?.ok_or(RepoError::SuiteNotFound(id))
    }
}

impl SuiteRepository for SqliteSuiteRepository<'_> {
    fn insert_suite(&self, draft: &NewSuite) -> RepoResult<Suite> {
        draft.validate()?;

        if self.name_exists(&draft.name)? {
            return Err(RepoError::DuplicateSuiteName(draft.name.clone()));
        }

        self.conn.execute(
            "INSERT INTO test_suites (name, description) VALUES (?1, ?2);",
            params![draft.name.as_str(), draft.description.as_deref()],
        )?;

        self.require_suite(self.conn.last_insert_rowid())
    }

    fn get_suite(&self, id: SuiteId) -> RepoResult<Option<Suite>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SUITE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_suite_row(row)?));
        }

        Ok(None)
    }

    fn list_suites(&self) -> RepoResult<Vec<Suite>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SUITE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut suites = Vec::new();
        while let Some(row) = rows.next()? {
            suites.push(parse_suite_row(row)?);
        }

        Ok(suites)
    }

    fn list_suites_with_counts(&self) -> RepoResult<Vec<SuiteCaseCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                s.id,
                s.name,
                s.description,
                COUNT(c.id) AS case_count
             FROM test_suites s
             LEFT JOIN test_cases c ON c.suite_id = s.id
             GROUP BY s.id
             ORDER BY s.id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut counts = Vec::new();
        while let Some(row) = rows.next()? {
            counts.push(SuiteCaseCount {
                id: row.get("id")?,
                name: row.get("name")?,
                description: row.get("description")?,
                case_count: row.get("case_count")?,
            });
        }

        Ok(counts)
    }

    fn update_suite(&self, id: SuiteId, patch: &SuitePatch) -> RepoResult<Suite> {
        patch.validate()?;

        if patch.is_empty() {
            return self.require_suite(id);
        }

        let mut assignments = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(Some(name)) = &patch.name {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.clone()));
        }

        if let Some(description) = &patch.description {
            assignments.push("description = ?");
            bind_values.push(match description {
                Some(text) => Value::Text(text.clone()),
                None => Value::Null,
            });
        }

        let sql = format!(
            "UPDATE test_suites SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        bind_values.push(Value::Integer(id));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(RepoError::SuiteNotFound(id));
        }

        self.require_suite(id)
    }

    fn delete_suite(&self, id: SuiteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM test_suites WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::SuiteNotFound(id));
        }

        Ok(())
    }
}

fn parse_suite_row(row: &Row<'_>) -> RepoResult<Suite> {
    Ok(Suite {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}
