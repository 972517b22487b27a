use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info, warn};

use crate::domain::{AppError, ExecPolicy};
use crate::ports::ProcessRunner;

/// Runs commands with `std::process::Command` from the stack root.
#[derive(Debug, Clone)]
pub struct SystemCommandRunner {
    cwd: PathBuf,
    policy: ExecPolicy,
}

impl SystemCommandRunner {
    pub fn new(cwd: PathBuf, policy: ExecPolicy) -> Self {
        Self { cwd, policy }
    }

    pub fn policy(&self) -> ExecPolicy {
        self.policy
    }
}

impl ProcessRunner for SystemCommandRunner {
    fn run(&self, argv: &[String]) -> Result<String, AppError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(AppError::config_error("Cannot run an empty command"));
        };
        let command_line = argv.join(" ");
        info!(command = %command_line, "run_shell_command");

        let output = match Command::new(program).args(args).current_dir(&self.cwd).output() {
            Ok(output) => output,
            Err(err) => {
                if self.policy == ExecPolicy::Strict {
                    return Err(AppError::CommandSpawn { command: command_line, details: err.to_string() });
                }
                warn!(command = %command_line, error = %err, "command could not be launched, continuing");
                return Ok(String::new());
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        debug!(command = %command_line, status = %output.status, "{stdout}");
        if !stderr.trim().is_empty() {
            debug!(command = %command_line, "stderr: {stderr}");
        }

        if !output.status.success() {
            if self.policy == ExecPolicy::Strict {
                return Err(AppError::CommandFailed {
                    command: command_line,
                    status: output.status.to_string(),
                    stderr: stderr.trim().to_string(),
                });
            }
            warn!(command = %command_line, status = %output.status, "command failed, continuing");
        }

        Ok(stdout)
    }
}
