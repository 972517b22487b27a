use serde::{Deserialize, Serialize};

/// Suffix appended to labels of steps that are still running.
pub const IN_PROGRESS_MARKER: &str = "...";

/// Latest install progress, polled by external status readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub progress: u8,
    pub text: String,
    pub complete: bool,
    pub domain: String,
    pub email: String,
}

/// `floor(step / total * 100)`, clamped to 100.
pub fn percent(step: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((step.min(total) * 100) / total) as u8
}
