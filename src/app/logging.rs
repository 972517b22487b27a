//! Append-only diagnostic log for one invocation.

use std::fs;
use std::path::Path;

use tracing::subscriber::DefaultGuard;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Keeps the log subscriber installed and flushes the file on drop.
pub struct LogGuard {
    _default: DefaultGuard,
    _worker: WorkerGuard,
}

/// Route `tracing` events for the current thread into `log_file`.
pub fn init(log_file: &Path) -> Result<LogGuard, AppError> {
    let directory = log_file.parent().filter(|dir| !dir.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = log_file
        .file_name()
        .ok_or_else(|| AppError::config_error(format!("Invalid log file path: {}", log_file.display())))?;
    fs::create_dir_all(directory)?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    let default = tracing::subscriber::set_default(subscriber);
    Ok(LogGuard { _default: default, _worker: worker })
}
