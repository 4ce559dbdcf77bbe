//! Optional file-logging bootstrap for embedding applications.
//!
//! The library itself only emits `log` facade events carrying metadata
//! (identifiers, counts, and workflow names; never task content). Hosts that
//! want those events on disk without wiring their own backend can call
//! [`init_file_logging`] once at startup.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "taskboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    spec: String,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Errors returned by the logging bootstrap.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoggingInitError {
    /// Logging was already initialized with different parameters.
    ///
    /// Re-initialization with the same spec and directory is an idempotent
    /// success; switching either is rejected.
    #[error("logging already initialized with spec `{spec}` in `{log_dir}`")]
    AlreadyInitialized {
        /// The spec logging is currently running with.
        spec: String,
        /// The directory logging is currently writing to.
        log_dir: PathBuf,
    },

    /// The backend rejected the spec or the directory.
    #[error("logging backend setup failed: {0}")]
    Backend(String),
}

/// Initializes rolling file logging once per process.
///
/// `spec` is a `flexi_logger` log specification such as `"info"` or
/// `"taskboard=debug"`. Files rotate by size and old files are cleaned up.
///
/// # Errors
///
/// Returns [`LoggingInitError::Backend`] when the backend rejects the spec
/// or directory, and [`LoggingInitError::AlreadyInitialized`] when logging
/// is already running with different parameters.
pub fn init_file_logging(spec: &str, log_dir: &Path) -> Result<(), LoggingInitError> {
    let state = LOGGING_STATE.get_or_try_init(|| start_backend(spec, log_dir))?;
    if state.spec == spec && state.log_dir == log_dir {
        return Ok(());
    }
    Err(LoggingInitError::AlreadyInitialized {
        spec: state.spec.clone(),
        log_dir: state.log_dir.clone(),
    })
}

fn start_backend(spec: &str, log_dir: &Path) -> Result<LoggingState, LoggingInitError> {
    let logger = Logger::try_with_str(spec)
        .map_err(|err| LoggingInitError::Backend(err.to_string()))?
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
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .map_err(|err| LoggingInitError::Backend(err.to_string()))?;

    Ok(LoggingState {
        spec: spec.to_owned(),
        log_dir: log_dir.to_owned(),
        _logger: logger,
    })
}
