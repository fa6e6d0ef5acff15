//! HTTP handlers for test case operations.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use log::info;
use serde::Deserialize;
use testdeck_core::{
    CaseId, CaseListQuery, CasePatch, CaseService, SqliteCaseRepository, SuiteId, TestCase,
};

use crate::error::{repo_error, ApiError};
use crate::state::AppState;

/// Query parameters for listing/searching cases.
#[derive(Debug, Default, Deserialize)]
pub struct ListCasesParams {
    /// Substring searched case-insensitively in name and description.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub suite_id: Option<SuiteId>,
}

/// List cases, optionally restricted to a suite and/or a search string.
pub async fn list_cases(
    State(state): State<AppState>,
    Query(params): Query<ListCasesParams>,
) -> Result<Json<Vec<TestCase>>, ApiError> {
    let conn = state.acquire()?;
    let service = CaseService::new(SqliteCaseRepository::new(&conn));
    let cases = service
        .list_cases(&CaseListQuery {
            suite_id: params.suite_id,
            text: params.q,
        })
        .map_err(repo_error)?;
    Ok(Json(cases))
}

/// Apply a sparse update to a case. `suite_id` is not updatable.
pub async fn update_case(
    State(state): State<AppState>,
    Path(id): Path<CaseId>,
    Json(patch): Json<CasePatch>,
) -> Result<Json<TestCase>, ApiError> {
    let conn = state.acquire()?;
    let service = CaseService::new(SqliteCaseRepository::new(&conn));
    let case = service.update_case(id, &patch).map_err(repo_error)?;
    Ok(Json(case))
}

/// Delete a single case.
pub async fn delete_case(
    State(state): State<AppState>,
    Path(id): Path<CaseId>,
) -> Result<StatusCode, ApiError> {
    let conn = state.acquire()?;
    let service = CaseService::new(SqliteCaseRepository::new(&conn));
    service.delete_case(id).map_err(repo_error)?;

    info!("event=case_deleted module=server status=ok case_id={id}");
    Ok(StatusCode::NO_CONTENT)
}
