//! Router configuration for the HTTP server.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{health, index};
use crate::handlers::suites::{
    add_case_to_suite, create_suite, delete_suite, get_suite, list_suites, suites_with_counts,
    update_suite,
};
use crate::handlers::testcases::{delete_case, list_cases, update_case};
use crate::state::AppState;

/// Creates the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/suites", get(list_suites).post(create_suite))
        .route(
            "/suites/:id",
            get(get_suite).patch(update_suite).delete(delete_suite),
        )
        .route("/suites/:id/testcases", post(add_case_to_suite))
        .route("/suites-with-counts", get(suites_with_counts))
        .route("/testcases", get(list_cases))
        .route("/testcases/:id", patch(update_case).delete(delete_case))
        .with_state(state)
}
