pub mod config;
pub mod env_file;
pub mod error;
pub mod hosts;
pub mod layout;
pub mod lifecycle;
pub mod progress;
pub mod secrets;
pub mod session;

pub use config::{ExecPolicy, InstallerConfig, ParseFailurePolicy};
pub use env_file::EnvFile;
pub use error::AppError;
pub use hosts::Subdomain;
pub use layout::{EnvArtifact, StackLayout};
pub use lifecycle::{Action, LifecycleState};
pub use progress::ProgressRecord;
pub use secrets::SecretGenerator;
pub use session::InstallationSession;
