//! Install progress persisted for external status readers.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::domain::progress::{IN_PROGRESS_MARKER, ProgressRecord, percent};

/// Counts steps against a fixed total and overwrites the progress file on
/// every change.
#[derive(Debug)]
pub struct ProgressTracker {
    path: PathBuf,
    total: usize,
    step: usize,
    domain: String,
    email: String,
}

impl ProgressTracker {
    pub fn new(path: impl Into<PathBuf>, total: usize) -> Self {
        Self { path: path.into(), total, step: 0, domain: String::new(), email: String::new() }
    }

    /// Domain and email reported from now on.
    pub fn set_identity(&mut self, domain: &str, email: &str) {
        self.domain = domain.to_string();
        self.email = email.to_string();
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Move to the next step and record it as running.
    pub fn advance(&mut self, label: &str) -> Result<ProgressRecord, AppError> {
        self.step += 1;
        self.write(format!("{label}{IN_PROGRESS_MARKER}"), false)
    }

    /// Record completion without moving the counter.
    pub fn complete(&mut self, label: &str) -> Result<ProgressRecord, AppError> {
        self.write(label.to_string(), true)
    }

    fn write(&self, text: String, complete: bool) -> Result<ProgressRecord, AppError> {
        let record = ProgressRecord {
            progress: percent(self.step, self.total),
            text,
            complete,
            domain: self.domain.clone(),
            email: self.email.clone(),
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(&record)?)?;
        debug!(step = self.step, total = self.total, progress = record.progress, "{}", record.text);
        Ok(record)
    }
}

/// Read the latest progress record, if any.
pub fn read_progress(path: &Path) -> Result<Option<ProgressRecord>, AppError> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}
