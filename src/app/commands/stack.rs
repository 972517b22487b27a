//! Operations on an already provisioned stack.

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, LifecycleState};
use crate::ports::{ProcessRunner, Prompter};
use crate::services::console::show_message;

/// Stop, pull newest images and start again detached.
pub fn update<R: ProcessRunner, P: Prompter>(ctx: &AppContext<R, P>) -> Result<(), AppError> {
    let compose = ctx.compose();
    info!(state = %LifecycleState::Updating, "update started");
    ctx.exec(compose.command(&["down"]))?;
    ctx.exec(compose.command(&["pull"]))?;
    ctx.exec(compose.command(&["up", "-d"]))?;
    info!(state = %LifecycleState::detect(&ctx.layout().host_lock()), "update finished");
    show_message("Update finished!");
    Ok(())
}

pub fn restart<R: ProcessRunner, P: Prompter>(ctx: &AppContext<R, P>) -> Result<(), AppError> {
    ctx.exec(ctx.compose().command(&["restart"]))?;
    show_message("Restart finished!");
    Ok(())
}

/// Stop containers without removing them.
pub fn stop<R: ProcessRunner, P: Prompter>(ctx: &AppContext<R, P>) -> Result<(), AppError> {
    ctx.exec(ctx.compose().command(&["stop"]))?;
    show_message("Containers stopped");
    Ok(())
}

pub fn start<R: ProcessRunner, P: Prompter>(ctx: &AppContext<R, P>) -> Result<(), AppError> {
    ctx.exec(ctx.compose().command(&["start"]))?;
    show_message("Containers started");
    Ok(())
}
