use crate::domain::AppError;

/// Runs external programs and returns what they printed.
pub trait ProcessRunner {
    /// Launch `argv[0]` with the remaining elements as arguments, wait for it
    /// and return its standard output as text.
    ///
    /// Whether a non-zero exit is an error is the implementation's policy.
    fn run(&self, argv: &[String]) -> Result<String, AppError>;
}
