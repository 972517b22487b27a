//! Collection of values that must be typed twice.

use tracing::debug;

use crate::domain::AppError;
use crate::ports::Prompter;
use crate::services::console::show_message;

/// Return `supplied` when it is non-empty, otherwise ask for the value and its
/// confirmation until they match, at most `max_attempts` times.
pub fn confirmed_value(
    prompter: &impl Prompter,
    label: &str,
    supplied: Option<&str>,
    max_attempts: usize,
) -> Result<String, AppError> {
    if let Some(value) = supplied.map(str::trim).filter(|value| !value.is_empty()) {
        debug!(label, "value supplied on command line");
        return Ok(value.to_string());
    }

    for attempt in 1..=max_attempts {
        let value = prompter.input(label)?;
        if value.is_empty() {
            show_message("A value is required, please retype value");
            continue;
        }
        let confirmation = prompter.input(&format!("Confirm {label}"))?;
        if confirmation == value {
            return Ok(value);
        }
        debug!(label, attempt, "confirmation mismatch");
        show_message("Confirm value was wrong, please retype value");
    }

    Err(AppError::InputNotConfirmed { label: label.trim().to_string(), attempts: max_attempts })
}
