//! Logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Initialize file-based rolling logs exactly once per process.
//! - Emit stable, metadata-only diagnostic events from core.
//!
//! # Invariants
//! - Logging init is idempotent for the same level and directory.
//! - Re-initialization with a different level or directory is rejected.
//! - Logging initialization must not panic.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "testdeck";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initializes file logging with the given level and directory.
///
/// Returns `Ok(())` when logging is active, or a human-readable error string
/// when initialization fails.
///
/// # Invariants
/// - Repeated calls with the same `level` and `log_dir` are idempotent.
/// - Calls that would change level or directory after init are rejected.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when `log_dir` is empty, non-absolute, or cannot be
///   created.
/// - Returns an error when logger backend setup fails.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir)?;

    let state = match LOGGING_STATE.get() {
        Some(state) => state,
        None => {
            LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
                std::fs::create_dir_all(&log_dir).map_err(|err| {
                    format!(
                        "failed to create log directory `{}`: {err}",
                        log_dir.display()
                    )
                })?;

                let logger = Logger::try_with_str(level)
                    .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                    .log_to_file(
                        FileSpec::default()
                            .directory(log_dir.as_path())
                            .basename(LOG_FILE_BASENAME),
                    )
                    .rotate(
                        Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                        Naming::Numbers,
                        Cleanup::KeepLogFiles(MAX_LOG_FILES),
                    )
                    .write_mode(WriteMode::BufferAndFlush)
                    .append()
                    .format_for_files(flexi_logger::detailed_format)
                    .start()
                    .map_err(|err| format!("failed to start logger: {err}"))?;

                install_panic_hook_once();

                info!(
                    "event=app_start module=core status=ok platform={} version={}",
                    std::env::consts::OS,
                    env!("CARGO_PKG_VERSION")
                );
                info!(
                    "event=core_init module=core status=ok level={level} log_dir={}",
                    log_dir.display()
                );

                Ok(LoggingState {
                    level,
                    log_dir: log_dir.clone(),
                    _logger: logger,
                })
            })?
        }
    };

    if state.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{level}`",
            state.level
        ));
    }

    Ok(())
}

/// Returns `(level, log_dir)` when logging is active, `None` otherwise.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Panic payloads can include request-controlled text; strip newlines
        // and cap length before the message reaches the log.
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_payload_summary(panic_info);
        error!(
            "event=panic_captured module=core status=error location={location} payload={payload}"
        );
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, normalize_level, normalize_log_dir, sanitize_message};
    use std::path::PathBuf;

    #[test]
    fn level_names_normalize_ignoring_case_and_padding() {
        assert_eq!(normalize_level("TRACE").unwrap(), "trace");
        assert_eq!(normalize_level(" Warning ").unwrap(), "warn");

        let err = normalize_level("verbose").unwrap_err();
        assert!(err.contains("unsupported log level"));
    }

    #[test]
    fn log_dir_must_be_absolute_and_non_blank() {
        assert!(normalize_log_dir("").is_err());
        assert!(normalize_log_dir("   ").is_err());

        let err = normalize_log_dir("logs/dev").unwrap_err();
        assert!(err.contains("absolute"));

        assert_eq!(
            normalize_log_dir(" /var/log/testdeck ").unwrap(),
            PathBuf::from("/var/log/testdeck")
        );
    }

    #[test]
    fn panic_payloads_are_flattened_and_capped() {
        assert_eq!(sanitize_message("bad\nrequest\rdata", 6), "bad re...");
        assert_eq!(sanitize_message("short", 64), "short");
    }

    #[test]
    fn init_is_idempotent_and_pins_level_and_directory() {
        let log_dir = tempfile::tempdir().unwrap();
        let log_dir_text = log_dir.path().to_str().unwrap();

        init_logging("info", log_dir_text).unwrap();
        init_logging("INFO", log_dir_text).unwrap();

        let err = init_logging("debug", log_dir_text).unwrap_err();
        assert!(err.contains("refusing to switch"));

        let other_dir = tempfile::tempdir().unwrap();
        let err = init_logging("info", other_dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("refusing to switch"));

        let (active_level, active_dir) = logging_status().unwrap();
        assert_eq!(active_level, "info");
        assert_eq!(active_dir, log_dir.path());
    }
}
