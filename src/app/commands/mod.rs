//! Lifecycle orchestration: one entry point per action.

pub mod install;
pub mod remove;
pub mod stack;
pub mod status;

#[cfg(test)]
pub(crate) mod test_support;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{Action, AppError, LifecycleState};
use crate::ports::{ProcessRunner, Prompter};
use crate::services::console::{show_message, show_title};

pub use install::{CertificateAction, INSTALL_STEPS, InstallOptions, InstallOutcome};
pub use remove::RemoveOutcome;
pub use status::StatusReport;

pub const INSTALL_QUESTION: &str = "Do you want to start installation?";
pub const REMOVE_QUESTION: &str =
    "This stops the stack and permanently deletes its data, configs and certificate. Continue?";

/// Result of one action.
#[derive(Debug, Clone)]
pub enum ActionOutcome {
    Installed(InstallOutcome),
    Removed(RemoveOutcome),
    Status(StatusReport),
    /// Update, restart, stop or start finished.
    Done(Action),
    /// The operator declined the confirmation.
    Cancelled,
}

/// Run `action` against the stack. Install and remove ask for confirmation
/// first; a declined confirmation changes nothing.
pub fn run_action<R: ProcessRunner, P: Prompter>(
    ctx: &AppContext<R, P>,
    action: Action,
    options: &InstallOptions,
) -> Result<ActionOutcome, AppError> {
    let before = LifecycleState::detect(&ctx.layout().host_lock());
    info!(?action, state = %before, "action requested");

    match action {
        Action::Install => {
            show_title(
                "Hi! This will install your Matrix Synapse backend. For now it only supports Ubuntu Linux",
            );
            if !ctx.prompter().confirm(INSTALL_QUESTION)? {
                show_message("Installation cancelled");
                return Ok(ActionOutcome::Cancelled);
            }
            install::execute(ctx, options).map(ActionOutcome::Installed)
        }
        Action::Remove => {
            if !ctx.prompter().confirm(REMOVE_QUESTION)? {
                show_message("Removal cancelled");
                return Ok(ActionOutcome::Cancelled);
            }
            remove::execute(ctx).map(ActionOutcome::Removed)
        }
        Action::Update => stack::update(ctx).map(|_| ActionOutcome::Done(action)),
        Action::Restart => stack::restart(ctx).map(|_| ActionOutcome::Done(action)),
        Action::Stop => stack::stop(ctx).map(|_| ActionOutcome::Done(action)),
        Action::Start => stack::start(ctx).map(|_| ActionOutcome::Done(action)),
        Action::Status => status::execute(ctx).map(ActionOutcome::Status),
    }
}
