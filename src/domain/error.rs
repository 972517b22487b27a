use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for fedstack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An env template line is not a single `KEY=VALUE` pair.
    #[error("Malformed line {line_number} in {}: '{line}' (expected exactly one '=')", .path.display())]
    MalformedEnvLine { path: PathBuf, line_number: usize, line: String },

    /// Structured config parsed but does not have the expected shape.
    #[error("Unexpected structure in {}: {reason}", .path.display())]
    UnexpectedStructure { path: PathBuf, reason: String },

    /// YAML parse or serialize failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialize failure (progress record).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// No host lock exists, so there is no certificate to remove.
    #[error("Host lock not found at {}: no certificate has been issued on this host", .path.display())]
    HostLockMissing { path: PathBuf },

    /// Interactive value entry was not confirmed within the allowed attempts.
    #[error("'{label}' was not confirmed after {attempts} attempts")]
    InputNotConfirmed { label: String, attempts: usize },

    /// A value is required but prompts are disabled.
    #[error("Missing required value '{0}' (pass it as an argument when prompts are disabled)")]
    MissingInput(String),

    /// Prompt failed or was interrupted.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// External command could not be launched (strict mode).
    #[error("Failed to launch '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// External command exited unsuccessfully (strict mode).
    #[error("Command '{command}' exited with status {status}: {stderr}")]
    CommandFailed { command: String, status: String, stderr: String },

    /// Bundled asset missing or unreadable.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MalformedEnvLine { .. }
            | AppError::UnexpectedStructure { .. }
            | AppError::Yaml(_)
            | AppError::Json(_)
            | AppError::TomlParse(_)
            | AppError::InputNotConfirmed { .. }
            | AppError::MissingInput(_) => io::ErrorKind::InvalidInput,
            AppError::HostLockMissing { .. } => io::ErrorKind::NotFound,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::CommandSpawn { .. }
            | AppError::CommandFailed { .. }
            | AppError::Internal { .. } => io::ErrorKind::Other,
        }
    }
}
