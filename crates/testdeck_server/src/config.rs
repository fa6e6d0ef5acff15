//! Environment-driven server configuration.
//!
//! # Environment variables
//! - `TESTDECK_ADDR` - bind address (default `127.0.0.1:8080`)
//! - `TESTDECK_DB` - SQLite database path (default `testdeck.db`)
//! - `TESTDECK_LOG_DIR` - enable file logging into this directory
//! - `LOG_LEVEL` - trace|debug|info|warn|error (default per build mode)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use testdeck_core::default_log_level;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DB_PATH: &str = "testdeck.db";

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is enabled only when a directory is configured.
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads configuration from the environment, applying defaults.
    pub fn from_env() -> Result<Self, String> {
        let addr_text = env::var("TESTDECK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let bind_addr = addr_text
            .parse()
            .map_err(|err| format!("invalid TESTDECK_ADDR `{addr_text}`: {err}"))?;

        let db_path = env::var("TESTDECK_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());

        let log_dir = match env::var("TESTDECK_LOG_DIR") {
            Ok(dir) => Some(absolute_path(PathBuf::from(dir))?),
            Err(_) => None,
        };

        Ok(Self {
            bind_addr,
            db_path,
            log_level,
            log_dir,
        })
    }
}

fn absolute_path(path: PathBuf) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir()
        .map_err(|err| format!("cannot resolve current directory: {err}"))?;
    Ok(cwd.join(path))
}
