use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts via dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

fn prompt_error(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => {
            AppError::Prompt("interrupted".to_string())
        }
        other => AppError::Prompt(other.to_string()),
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        Ok(value.trim().to_string())
    }

    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        Confirm::new().with_prompt(question).default(false).interact().map_err(prompt_error)
    }
}

/// Used when prompts are suppressed: confirmations are accepted and values
/// must already have been supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYesPrompter;

impl Prompter for AssumeYesPrompter {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        Err(AppError::MissingInput(prompt.trim().trim_end_matches(':').to_string()))
    }

    fn confirm(&self, _question: &str) -> Result<bool, AppError> {
        Ok(true)
    }
}
