use std::fmt;
use std::path::Path;

/// Where the managed stack stands. Not persisted directly: reconstructed on
/// each run from what is on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    NotStarted,
    Installing,
    Installed,
    Updating,
    Removing,
}

impl LifecycleState {
    /// A host lock means certificates were issued, i.e. an install got past
    /// the certificate step.
    pub fn detect(host_lock: &Path) -> Self {
        if host_lock.is_file() { LifecycleState::Installed } else { LifecycleState::NotStarted }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LifecycleState::NotStarted => "not started",
            LifecycleState::Installing => "installing",
            LifecycleState::Installed => "installed",
            LifecycleState::Updating => "updating",
            LifecycleState::Removing => "removing",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Actions selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Update,
    Restart,
    Stop,
    Start,
    Remove,
    Status,
}

impl Action {
    /// State held while the action runs.
    pub fn transient_state(&self) -> Option<LifecycleState> {
        match self {
            Action::Install => Some(LifecycleState::Installing),
            Action::Update => Some(LifecycleState::Updating),
            Action::Remove => Some(LifecycleState::Removing),
            Action::Restart | Action::Stop | Action::Start | Action::Status => None,
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Action::Remove)
    }
}
