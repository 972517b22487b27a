mod process_runner;
mod prompter;

pub use process_runner::ProcessRunner;
pub use prompter::Prompter;
