//! Diagnostic logging bootstrap.
//!
//! Logs go to rolling files, never to the terminal, so parse output on
//! stdout/stderr stays clean. Records are written unbuffered: a `parse`
//! run exits long before any background flush would fire. Initialization
//! is idempotent for the same level and directory and never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const LOG_FILE_BASENAME: &str = "tatoolkit";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceLock<LoggingState> = OnceLock::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Starts file logging at `level` under `log_dir`.
///
/// # Errors
/// - `level` is not one of trace|debug|info|warn|error.
/// - `log_dir` cannot be created, or logging is already running with a
///   different level or directory.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        return check_matches(state, level, log_dir);
    }

    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::Direct)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    let state = LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    };
    if LOGGING_STATE.set(state).is_err() {
        // Lost a race with another initializer; its settings stand.
        if let Some(state) = LOGGING_STATE.get() {
            return check_matches(state, level, log_dir);
        }
    }

    info!(
        "event=app_start module=logging status=ok level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

fn check_matches(state: &LoggingState, level: &str, log_dir: &Path) -> Result<(), String> {
    if state.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }
    Ok(())
}

pub fn default_log_level() -> &'static str {
    "info"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level(" DEBUG "), Ok("debug"));
        assert_eq!(normalize_level("warning"), Ok("warn"));
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn test_init_is_idempotent_and_refuses_changes() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        assert_eq!(init_logging("info", &log_dir), Ok(()));
        assert_eq!(init_logging("info", &log_dir), Ok(()));
        assert!(log_dir.is_dir());

        assert!(init_logging("debug", &log_dir).is_err());
        assert!(init_logging("info", &dir.path().join("elsewhere")).is_err());
        assert!(init_logging("loud", &log_dir).is_err());
    }
}
