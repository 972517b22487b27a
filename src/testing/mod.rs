mod recording_runner;
mod scripted_prompter;

pub use recording_runner::RecordingRunner;
pub use scripted_prompter::ScriptedPrompter;
