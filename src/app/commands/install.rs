//! Full provisioning of a bare host.

use std::fs;
use std::path::PathBuf;
use std::thread;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, InstallationSession, LifecycleState, hosts};
use crate::ports::{ProcessRunner, Prompter};
use crate::services::certificates;
use crate::services::console::show_message;
use crate::services::host_lock::write_host_lock;
use crate::services::input::confirmed_value;
use crate::services::{ConfigMaterializer, PatchOutcome, ProgressTracker};

/// Number of tracked steps in a full install.
pub const INSTALL_STEPS: usize = 14;

pub const DOMAIN_PROMPT: &str = "Domain for services: ";
pub const EMAIL_PROMPT: &str = "Email: ";

#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub domain: Option<String>,
    pub email: Option<String>,
}

/// What happened to the TLS certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateAction {
    Issued,
    Renewed,
    /// Issuance ran but no certificate appeared; the host lock was not written.
    NotIssued,
}

#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub domain: String,
    pub email: String,
    pub certificate: CertificateAction,
    pub env_files: Vec<PathBuf>,
    pub synapse_config: PatchOutcome,
    pub sygnal_config: PatchOutcome,
}

fn begin(progress: &mut ProgressTracker, label: &str) -> Result<(), AppError> {
    progress.advance(label)?;
    show_message(label);
    Ok(())
}

pub fn execute<R: ProcessRunner, P: Prompter>(
    ctx: &AppContext<R, P>,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError> {
    let layout = ctx.layout();
    let commands = &ctx.config().commands;
    let compose = ctx.compose();
    let mut progress = ProgressTracker::new(layout.progress_file(), INSTALL_STEPS);
    let mut session = InstallationSession::new(ctx.secrets());
    info!(state = %LifecycleState::Installing, root = %layout.root().display(), "install started");

    begin(&mut progress, "Create data directory")?;
    fs::create_dir_all(layout.data_dir())?;

    begin(&mut progress, "Install docker and docker-compose")?;
    ctx.exec(ctx.package_install(&commands.runtime_packages))?;

    begin(&mut progress, "Install certbot")?;
    ctx.exec(ctx.package_install(&commands.certbot_packages))?;

    begin(&mut progress, "Stop running containers if any")?;
    ctx.exec(compose.command(&["down"]))?;

    begin(&mut progress, "Remove existing database data")?;
    for volume in layout.database_volumes() {
        if volume.is_dir() {
            fs::remove_dir_all(&volume)?;
            info!(path = %volume.display(), "removed database volume");
        }
    }

    begin(&mut progress, "Collect domain and email")?;
    let max_attempts = ctx.config().policy.max_prompt_attempts;
    let supplied_domain = options.domain.as_deref();
    let supplied_email = options.email.as_deref();
    let missing = |value: Option<&str>| value.is_none_or(|value| value.trim().is_empty());
    if missing(supplied_domain) || missing(supplied_email) {
        show_message("Please enter next mandatory information:");
    }
    let domain = confirmed_value(ctx.prompter(), DOMAIN_PROMPT, supplied_domain, max_attempts)?;
    let email = confirmed_value(ctx.prompter(), EMAIL_PROMPT, supplied_email, max_attempts)?;
    session.identify(&domain, &email);
    progress.set_identity(&domain, &email);

    begin(&mut progress, "Issue TLS certificates")?;
    let certificate = ensure_certificate(ctx, &session)?;

    let materializer = ConfigMaterializer::new(
        layout,
        &session,
        ctx.secrets(),
        ctx.config().policy.structured_parse,
    );

    begin(&mut progress, "Write environment files")?;
    let env_files = materializer.write_env_files()?;

    begin(&mut progress, "Write TURN relay config")?;
    materializer.write_turn_config()?;

    begin(&mut progress, "Write reverse proxy config")?;
    materializer.write_proxy_config()?;
    ctx.exec(commands.proxy_reload.clone())?;
    thread::sleep(ctx.settle_delay());

    begin(&mut progress, "Generate Synapse config")?;
    ctx.exec(compose.synapse_generate(layout.synapse_compose_file()))?;

    begin(&mut progress, "Patch Synapse config")?;
    let synapse_config = materializer.patch_synapse_config()?;
    report_patch("Synapse", &synapse_config);

    begin(&mut progress, "Patch Sygnal config")?;
    let sygnal_config = materializer.patch_sygnal_config()?;
    report_patch("Sygnal", &sygnal_config);

    begin(&mut progress, "Start containers")?;
    ctx.exec(compose.command(&["up", "-d"]))?;

    progress.complete("Complete!")?;
    show_message("Complete!");
    info!(state = %LifecycleState::detect(&layout.host_lock()), "install finished");

    Ok(InstallOutcome { domain, email, certificate, env_files, synapse_config, sygnal_config })
}

/// Renew when the certificate already exists, otherwise request it. The host
/// lock is only written once a certificate is present on disk.
fn ensure_certificate<R: ProcessRunner, P: Prompter>(
    ctx: &AppContext<R, P>,
    session: &InstallationSession,
) -> Result<CertificateAction, AppError> {
    let layout = ctx.layout();
    let certbot = &ctx.config().commands.certbot;
    let certificate = layout.certificate_file(session.domain());

    let action = if certificate.is_file() {
        show_message("Certificate already exists. Renewing instead of requesting a new one");
        ctx.exec(certificates::renew_command(certbot, session.domain()))?;
        CertificateAction::Renewed
    } else {
        show_message(&format!(
            "Requesting certificate for {}",
            hosts::certificate_hosts(session.domain()).join(", ")
        ));
        ctx.exec(certificates::issue_command(certbot, session.email(), session.domain()))?;
        if certificate.is_file() { CertificateAction::Issued } else { CertificateAction::NotIssued }
    };

    if action == CertificateAction::NotIssued {
        warn!(path = %certificate.display(), "certificate missing after issuance");
        show_message("Certificate was not issued. Host lock not written; check install.log");
    } else {
        write_host_lock(&layout.host_lock(), session.domain())?;
    }
    Ok(action)
}

fn report_patch(service: &str, outcome: &PatchOutcome) {
    if let PatchOutcome::Skipped { reason } = outcome {
        show_message(&format!("{service} config was left unchanged: {reason}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::test_support::{Stack, stack};
    use crate::domain::progress::ProgressRecord;
    use crate::domain::{EnvArtifact, EnvFile};
    use crate::services::progress_tracker::read_progress;

    fn options() -> InstallOptions {
        InstallOptions {
            domain: Some("example.com".to_string()),
            email: Some("admin@example.com".to_string()),
        }
    }

    fn env(stack: &Stack, artifact: EnvArtifact) -> EnvFile {
        let path = stack.ctx.layout().env_file(artifact);
        EnvFile::parse(&fs::read_to_string(&path).unwrap(), &path).unwrap()
    }

    #[test]
    fn install_runs_steps_in_order() {
        let stack = stack(&[]);
        stack.issue_certificates_on_request();

        execute(&stack.ctx, &options()).unwrap();

        let commands = stack.runner().commands();
        let firsts: Vec<&str> = commands.iter().map(|argv| argv[0].as_str()).collect();
        assert_eq!(firsts, vec![
            "apt",
            "apt",
            "docker-compose",
            "certbot",
            "systemctl",
            "docker-compose",
            "docker-compose"
        ]);
        assert_eq!(commands[0], ["apt", "install", "-y", "docker", "docker-compose"]);
        assert_eq!(commands[1], ["apt", "install", "-y", "certbot", "python3-certbot-nginx"]);
        assert_eq!(commands[2].last().map(String::as_str), Some("down"));
        assert_eq!(commands[5][3..], ["run", "--rm", "synapse", "generate"]);
        assert_eq!(commands[6][commands[6].len() - 2..], ["up", "-d"]);
    }

    #[test]
    fn certificate_request_names_three_hosts() {
        let stack = stack(&[]);
        stack.issue_certificates_on_request();

        let outcome = execute(&stack.ctx, &options()).unwrap();

        assert_eq!(outcome.certificate, CertificateAction::Issued);
        let issued = stack.runner().matching(&["certbot", "certonly"]);
        assert_eq!(issued.len(), 1);
        assert_eq!(
            certificates::requested_hosts(&issued[0]),
            vec!["api.example.com", "matrix.example.com", "meet.example.com"]
        );
        assert_eq!(fs::read_to_string(stack.ctx.layout().host_lock()).unwrap(), "example.com");
    }

    #[test]
    fn missing_certificate_leaves_no_host_lock() {
        let stack = stack(&[]);

        let outcome = execute(&stack.ctx, &options()).unwrap();

        assert_eq!(outcome.certificate, CertificateAction::NotIssued);
        assert!(!stack.ctx.layout().host_lock().exists());
    }

    #[test]
    fn second_install_renews_and_regenerates_secrets() {
        let stack = stack(&[]);
        stack.issue_certificates_on_request();

        execute(&stack.ctx, &options()).unwrap();
        let first_password = env(&stack, EnvArtifact::Matrix).get("POSTGRES_PASSWORD").unwrap().to_string();

        let second = execute(&stack.ctx, &options()).unwrap();
        let second_password = env(&stack, EnvArtifact::Matrix).get("POSTGRES_PASSWORD").unwrap().to_string();

        assert_eq!(second.certificate, CertificateAction::Renewed);
        assert_eq!(stack.runner().matching(&["certbot", "certonly"]).len(), 1);
        assert_eq!(stack.runner().matching(&["certbot", "renew"]).len(), 1);
        assert_ne!(first_password, second_password);
    }

    #[test]
    fn progress_ends_complete_at_100() {
        let stack = stack(&[]);
        execute(&stack.ctx, &options()).unwrap();

        let record = read_progress(&stack.ctx.layout().progress_file()).unwrap().unwrap();
        assert_eq!(record, ProgressRecord {
            progress: 100,
            text: "Complete!".to_string(),
            complete: true,
            domain: "example.com".to_string(),
            email: "admin@example.com".to_string(),
        });
    }

    #[test]
    fn prompts_for_missing_values() {
        let stack = stack(&["example.org", "example.org", "me@example.org", "me@example.org"]);

        let outcome = execute(&stack.ctx, &InstallOptions::default()).unwrap();

        assert_eq!(outcome.domain, "example.org");
        assert_eq!(outcome.email, "me@example.org");
        assert_eq!(env(&stack, EnvArtifact::Common).get("DOMAIN"), Some("example.org"));
    }

    #[test]
    fn removes_previous_database_volumes() {
        let stack = stack(&[]);
        for volume in stack.ctx.layout().database_volumes() {
            fs::create_dir_all(volume.join("pgdata")).unwrap();
        }

        execute(&stack.ctx, &options()).unwrap();

        for volume in stack.ctx.layout().database_volumes() {
            assert!(!volume.exists());
        }
    }

    #[test]
    fn synapse_and_sygnal_are_patched() {
        let stack = stack(&[]);
        let outcome = execute(&stack.ctx, &options()).unwrap();

        assert_eq!(outcome.synapse_config, PatchOutcome::Patched);
        assert_eq!(outcome.sygnal_config, PatchOutcome::Patched);
        let synapse = fs::read_to_string(stack.ctx.layout().synapse_config()).unwrap();
        assert!(synapse.contains("psycopg2"));
        assert!(synapse.contains("public_baseurl: https://matrix.example.com"));
    }

    #[test]
    fn install_completes_when_synapse_generate_writes_nothing() {
        let stack = stack(&[]);
        stack.runner().clear_hooks(&["synapse", "generate"]);

        let outcome = execute(&stack.ctx, &options()).unwrap();

        assert!(matches!(outcome.synapse_config, PatchOutcome::Skipped { .. }));
        assert_eq!(outcome.sygnal_config, PatchOutcome::Patched);
        assert!(!stack.ctx.layout().synapse_config().exists());
        assert_eq!(stack.runner().matching(&["up", "-d"]).len(), 1);
        let record = read_progress(&stack.ctx.layout().progress_file()).unwrap().unwrap();
        assert!(record.complete);
    }

    #[test]
    fn unreadable_synapse_config_is_skipped_by_default() {
        let stack = stack(&[]);
        stack.generate_synapse_config_with("database: [unclosed\n");

        let outcome = execute(&stack.ctx, &options()).unwrap();

        assert!(matches!(outcome.synapse_config, PatchOutcome::Skipped { .. }));
        assert_eq!(stack.runner().matching(&["up", "-d"]).len(), 1);
    }
}
