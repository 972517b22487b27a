//! fedstack: install and manage a self-hosted Matrix federation stack.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{Invocation, TerminalContext, build_context};
pub use app::commands::{
    ActionOutcome, CertificateAction, INSTALL_STEPS, InstallOptions, InstallOutcome, RemoveOutcome,
    StatusReport, run_action,
};
pub use domain::{Action, AppError, LifecycleState};
