//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::app::api::{self, Invocation};
use crate::app::commands::{self, ActionOutcome, InstallOptions, StatusReport};
use crate::app::logging;
use crate::domain::{Action, AppError};

#[derive(Parser)]
#[command(name = "fedstack")]
#[command(version)]
#[command(
    about = "Install and manage a self-hosted Matrix Synapse, Jitsi, coturn and Sygnal stack",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    action: ActionFlags,
    /// Domain the services are published under (e.g. example.com)
    #[arg(long)]
    domain: Option<String>,
    /// Contact email for certificate registration
    #[arg(long)]
    email: Option<String>,
    /// Do not prompt: accept confirmations, require --domain and --email
    #[arg(short = 'y', long = "yes")]
    assume_yes: bool,
    /// Config file (default: fedstack.toml in the stack root)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stack root containing the compose files (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,
    /// Abort when an external command fails instead of continuing
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ActionFlags {
    /// Install the whole stack on this host
    #[arg(short = 'i', long)]
    install: bool,
    /// Pull newest images and restart the stack
    #[arg(short = 'u', long)]
    update: bool,
    /// Restart running containers in place
    #[arg(short = 'r', long)]
    restart: bool,
    /// Stop containers, delete all data, configs and the certificate
    #[arg(long)]
    remove: bool,
    /// Stop containers without removing them
    #[arg(long)]
    stop: bool,
    /// Start stopped containers
    #[arg(long)]
    start: bool,
    /// Show install state and the latest progress
    #[arg(short = 's', long)]
    status: bool,
}

impl ActionFlags {
    fn action(&self) -> Action {
        let selected = [
            (self.install, Action::Install),
            (self.update, Action::Update),
            (self.restart, Action::Restart),
            (self.remove, Action::Remove),
            (self.stop, Action::Stop),
            (self.start, Action::Start),
            (self.status, Action::Status),
        ];
        selected
            .into_iter()
            .find_map(|(flag, action)| flag.then_some(action))
            .unwrap_or(Action::Status)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let action = cli.action.action();
    let invocation = Invocation {
        root: cli.root,
        config: cli.config,
        strict: cli.strict,
        assume_yes: cli.assume_yes,
    };
    let ctx = api::build_context(&invocation)?;
    let _log = logging::init(&ctx.layout().log_file())?;

    let options = InstallOptions { domain: cli.domain, email: cli.email };
    match commands::run_action(&ctx, action, &options)? {
        ActionOutcome::Status(report) => print_status(&report),
        ActionOutcome::Installed(outcome) => {
            println!("✅ Stack installed for {}", outcome.domain);
        }
        ActionOutcome::Removed(outcome) => {
            println!("✅ Removed stack for {} ({} path(s) deleted)", outcome.domain, outcome.removed.len());
        }
        ActionOutcome::Done(_) | ActionOutcome::Cancelled => {}
    }
    Ok(())
}

fn print_status(report: &StatusReport) {
    println!("State: {}", report.state);
    if let Some(domain) = &report.domain {
        println!("Domain: {}", domain);
    }
    match &report.progress {
        Some(progress) => {
            let marker = if progress.complete { "complete" } else { "in progress" };
            println!("Last install: {}% {} ({})", progress.progress, progress.text, marker);
        }
        None => println!("Last install: none recorded"),
    }
}
