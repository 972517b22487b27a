use std::time::Duration;

use crate::domain::{AppError, InstallerConfig, SecretGenerator, StackLayout};
use crate::ports::{ProcessRunner, Prompter};
use crate::services::ComposeStack;

/// Everything one invocation needs, constructed once and passed to every
/// command.
pub struct AppContext<R: ProcessRunner, P: Prompter> {
    layout: StackLayout,
    config: InstallerConfig,
    runner: R,
    prompter: P,
    secrets: SecretGenerator,
}

impl<R: ProcessRunner, P: Prompter> AppContext<R, P> {
    pub fn new(
        layout: StackLayout,
        config: InstallerConfig,
        runner: R,
        prompter: P,
        secrets: SecretGenerator,
    ) -> Self {
        Self { layout, config, runner, prompter, secrets }
    }

    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn secrets(&self) -> &SecretGenerator {
        &self.secrets
    }

    pub fn compose(&self) -> ComposeStack {
        ComposeStack::new(&self.config.commands.compose, self.layout.compose_files())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.config.policy.settle_delay_secs)
    }

    /// Run a command through the configured runner. The runner logs the
    /// command and its output.
    pub fn exec(&self, argv: Vec<String>) -> Result<String, AppError> {
        self.runner.run(&argv)
    }

    /// `package_install` prefix followed by `packages`.
    pub fn package_install(&self, packages: &[String]) -> Vec<String> {
        let mut argv = self.config.commands.package_install.clone();
        argv.extend(packages.iter().cloned());
        argv
    }
}
