use crate::app::AppContext;
use crate::domain::{AppError, LifecycleState, ProgressRecord};
use crate::ports::{ProcessRunner, Prompter};
use crate::services::host_lock::read_host_lock;
use crate::services::progress_tracker::read_progress;

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub state: LifecycleState,
    /// Domain from the host lock, if certificates were issued.
    pub domain: Option<String>,
    pub progress: Option<ProgressRecord>,
}

pub fn execute<R: ProcessRunner, P: Prompter>(ctx: &AppContext<R, P>) -> Result<StatusReport, AppError> {
    let layout = ctx.layout();
    let state = LifecycleState::detect(&layout.host_lock());
    let domain = match state {
        LifecycleState::Installed => Some(read_host_lock(&layout.host_lock())?),
        _ => None,
    };
    let progress = read_progress(&layout.progress_file())?;
    Ok(StatusReport { state, domain, progress })
}
