//! TestDeck HTTP server.
//!
//! Serves the suite/case CRUD API over JSON.
//!
//! # Endpoints
//! - GET / - API index, GET /health - liveness probe
//! - GET|POST /suites, GET|PATCH|DELETE /suites/:id
//! - POST /suites/:id/testcases
//! - GET /suites-with-counts
//! - GET /testcases?q=&suite_id=, PATCH|DELETE /testcases/:id
//!
//! # Environment variables
//! - `TESTDECK_ADDR` - bind address (default 127.0.0.1:8080)
//! - `TESTDECK_DB` - SQLite database path (default testdeck.db)
//! - `TESTDECK_LOG_DIR` - enable file logging into this directory
//! - `LOG_LEVEL` - trace|debug|info|warn|error

mod config;
mod error;
mod handlers;
mod router;
mod state;

use crate::config::ServerConfig;
use crate::router::create_router;
use crate::state::AppState;
use log::info;
use testdeck_core::db::open_db;
use testdeck_core::init_logging;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("testdeck-server: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env()?;

    if let Some(log_dir) = &config.log_dir {
        let log_dir = log_dir
            .to_str()
            .ok_or("TESTDECK_LOG_DIR must be valid UTF-8")?;
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path).map_err(|err| {
        format!(
            "failed to open database `{}`: {err}",
            config.db_path.display()
        )
    })?;

    let app = create_router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|err| format!("failed to bind {}: {err}", config.bind_addr))?;

    info!(
        "event=server_start module=server status=ok addr={}",
        config.bind_addr
    );

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {err}"))
}
