use crate::domain::AppError;

/// Interactive questions asked during a run.
pub trait Prompter {
    /// Read one line of free text, trimmed.
    fn input(&self, prompt: &str) -> Result<String, AppError>;

    /// Yes/no question. Empty input means no.
    fn confirm(&self, question: &str) -> Result<bool, AppError>;
}

impl<T: Prompter + ?Sized> Prompter for Box<T> {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        (**self).input(prompt)
    }

    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        (**self).confirm(question)
    }
}
