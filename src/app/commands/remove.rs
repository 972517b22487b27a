//! Irreversible teardown of the stack and everything install produced.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, LifecycleState, hosts};
use crate::ports::{ProcessRunner, Prompter};
use crate::services::certificates;
use crate::services::console::show_message;
use crate::services::host_lock::read_host_lock;

#[derive(Debug, Clone, Default)]
pub struct RemoveOutcome {
    pub domain: String,
    pub removed: Vec<PathBuf>,
}

/// Tear everything down. The host lock is read first: without it there is no
/// certificate name to delete and nothing is touched. The lock is removed only
/// after the certificate is deleted, so a failed delete can be retried.
pub fn execute<R: ProcessRunner, P: Prompter>(ctx: &AppContext<R, P>) -> Result<RemoveOutcome, AppError> {
    let layout = ctx.layout();
    let domain = read_host_lock(&layout.host_lock())?;
    let compose = ctx.compose();
    info!(state = %LifecycleState::Removing, domain = %domain, "remove started");

    show_message("Stop containers");
    ctx.exec(compose.command(&["stop"]))?;

    show_message("Remove containers");
    ctx.exec(compose.command(&["rm", "-f"]))?;

    show_message("Remove database data");
    let mut removed = Vec::new();
    for dir in layout.database_volumes().into_iter().chain(layout.generated_dirs()) {
        if dir.is_dir() {
            fs::remove_dir_all(&dir)?;
            removed.push(dir);
        }
    }

    show_message("Remove generated configs");
    for file in layout.generated_files() {
        if file.is_file() {
            fs::remove_file(&file)?;
            removed.push(file);
        }
    }

    show_message(&format!("Delete certificate {}", hosts::certificate_name(&domain)));
    ctx.exec(certificates::delete_command(&ctx.config().commands.certbot, &domain))?;

    let lock = layout.host_lock();
    fs::remove_file(&lock)?;
    removed.push(lock);

    info!(state = %LifecycleState::detect(&layout.host_lock()), removed = removed.len(), "remove finished");
    show_message("Removal finished!");
    Ok(RemoveOutcome { domain, removed })
}
