//! Wiring of real adapters into an [`AppContext`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::{AssumeYesPrompter, DialoguerPrompter, SystemCommandRunner};
use crate::app::AppContext;
use crate::domain::config::{CONFIG_FILE, parse_config_content};
use crate::domain::{AppError, ExecPolicy, InstallerConfig, SecretGenerator, StackLayout};
use crate::ports::Prompter;

/// Context used by the binary.
pub type TerminalContext = AppContext<SystemCommandRunner, Box<dyn Prompter>>;

/// Invocation-wide settings taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Stack root; defaults to the current directory.
    pub root: Option<PathBuf>,
    /// Explicit config file; must exist when given.
    pub config: Option<PathBuf>,
    /// Treat failing external commands as errors.
    pub strict: bool,
    /// Suppress prompts.
    pub assume_yes: bool,
}

/// Load `fedstack.toml` from `root`, or `explicit` when given. A missing
/// default file yields the built-in configuration.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<InstallerConfig, AppError> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let default = root.join(CONFIG_FILE);
            if !default.is_file() {
                return Ok(InstallerConfig::default());
            }
            default
        }
    };
    parse_config_content(&fs::read_to_string(path)?)
}

pub fn build_context(invocation: &Invocation) -> Result<TerminalContext, AppError> {
    let root = match &invocation.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    let mut config = load_config(&root, invocation.config.as_deref())?;
    if invocation.strict {
        config.policy.exec = ExecPolicy::Strict;
    }

    let layout = StackLayout::new(root.clone(), config.paths.clone());
    let runner = SystemCommandRunner::new(root, config.policy.exec);
    let prompter: Box<dyn Prompter> =
        if invocation.assume_yes { Box::new(AssumeYesPrompter) } else { Box::new(DialoguerPrompter) };

    Ok(AppContext::new(layout, config, runner, prompter, SecretGenerator::from_entropy()))
}
