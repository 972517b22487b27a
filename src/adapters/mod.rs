mod command_runner;
mod dialoguer_prompter;

pub use command_runner::SystemCommandRunner;
pub use dialoguer_prompter::{AssumeYesPrompter, DialoguerPrompter};
