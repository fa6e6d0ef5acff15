//! HTTP handlers for suite operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use log::info;
use testdeck_core::{
    CaseService, NewCase, NewSuite, RepoError, SqliteCaseRepository, SqliteSuiteRepository, Suite,
    SuiteCaseCount, SuiteId, SuitePatch, SuiteService, SuiteWithCases, TestCase,
};

use crate::error::{repo_error, ApiError};
use crate::state::AppState;

/// List all suites without case detail.
pub async fn list_suites(State(state): State<AppState>) -> Result<Json<Vec<Suite>>, ApiError> {
    let conn = state.acquire()?;
    let service = SuiteService::new(SqliteSuiteRepository::new(&conn));
    let suites = service.list_suites().map_err(repo_error)?;
    Ok(Json(suites))
}

/// Get one suite with its embedded cases.
pub async fn get_suite(
    State(state): State<AppState>,
    Path(id): Path<SuiteId>,
) -> Result<Json<SuiteWithCases>, ApiError> {
    let conn = state.acquire()?;
    let service = SuiteService::new(SqliteSuiteRepository::new(&conn));
    let cases = SqliteCaseRepository::new(&conn);

    service
        .get_suite_with_cases(&cases, id)
        .map_err(repo_error)?
        .map(Json)
        .ok_or_else(|| repo_error(RepoError::SuiteNotFound(id)))
}

/// Create a suite; duplicate names are rejected with a conflict.
pub async fn create_suite(
    State(state): State<AppState>,
    Json(draft): Json<NewSuite>,
) -> Result<(StatusCode, Json<Suite>), ApiError> {
    let conn = state.acquire()?;
    let service = SuiteService::new(SqliteSuiteRepository::new(&conn));
    let suite = service.create_suite(&draft).map_err(repo_error)?;

    info!(
        "event=suite_created module=server status=ok suite_id={}",
        suite.id
    );
    Ok((StatusCode::CREATED, Json(suite)))
}

/// Apply a sparse update to a suite.
pub async fn update_suite(
    State(state): State<AppState>,
    Path(id): Path<SuiteId>,
    Json(patch): Json<SuitePatch>,
) -> Result<Json<Suite>, ApiError> {
    let conn = state.acquire()?;
    let service = SuiteService::new(SqliteSuiteRepository::new(&conn));
    let suite = service.update_suite(id, &patch).map_err(repo_error)?;
    Ok(Json(suite))
}

/// Delete a suite; owned cases go with it.
pub async fn delete_suite(
    State(state): State<AppState>,
    Path(id): Path<SuiteId>,
) -> Result<StatusCode, ApiError> {
    let conn = state.acquire()?;
    let service = SuiteService::new(SqliteSuiteRepository::new(&conn));
    service.delete_suite(id).map_err(repo_error)?;

    info!("event=suite_deleted module=server status=ok suite_id={id}");
    Ok(StatusCode::NO_CONTENT)
}

/// Create a case inside a suite.
pub async fn add_case_to_suite(
    State(state): State<AppState>,
    Path(id): Path<SuiteId>,
    Json(draft): Json<NewCase>,
) -> Result<(StatusCode, Json<TestCase>), ApiError> {
    let conn = state.acquire()?;
    let service = CaseService::new(SqliteCaseRepository::new(&conn));
    let case = service.add_case_to_suite(id, &draft).map_err(repo_error)?;

    info!(
        "event=case_created module=server status=ok suite_id={id} case_id={}",
        case.id
    );
    Ok((StatusCode::CREATED, Json(case)))
}

/// List suites with their case counts for overview panels.
pub async fn suites_with_counts(
    State(state): State<AppState>,
) -> Result<Json<Vec<SuiteCaseCount>>, ApiError> {
    let conn = state.acquire()?;
    let service = SuiteService::new(SqliteSuiteRepository::new(&conn));
    let counts = service.list_suites_with_counts().map_err(repo_error)?;
    Ok(Json(counts))
}
