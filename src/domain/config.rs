//! Installer configuration (`fedstack.toml`).

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::AppError;

/// File name looked up in the stack root when `--config` is not given.
pub const CONFIG_FILE: &str = "fedstack.toml";

/// Top-level installer configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Filesystem locations. Relative paths resolve against the stack root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    pub env_dir: PathBuf,
    pub coturn_config: PathBuf,
    pub nginx_template: PathBuf,
    pub nginx_config: PathBuf,
    pub synapse_config: PathBuf,
    pub sygnal_config: PathBuf,
    pub media_dir: PathBuf,
    pub progress_file: PathBuf,
    pub host_lock: PathBuf,
    pub log_file: PathBuf,
    pub letsencrypt_live_dir: PathBuf,
    pub database_volumes: Vec<PathBuf>,
    pub compose_files: Vec<PathBuf>,
    /// Compose file that defines the `synapse` service.
    pub synapse_compose_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".into(),
            env_dir: "configs/env".into(),
            coturn_config: "configs/coturn/turnserver.conf".into(),
            nginx_template: "configs/nginx/nginx-conf.template".into(),
            nginx_config: "configs/nginx/nginx.conf".into(),
            synapse_config: "data/synapse/homeserver.yaml".into(),
            sygnal_config: "configs/sygnal/sygnal.yaml".into(),
            media_dir: "media".into(),
            progress_file: "install_progress.json".into(),
            host_lock: "host.lock".into(),
            log_file: "install.log".into(),
            letsencrypt_live_dir: "/etc/letsencrypt/live".into(),
            database_volumes: vec![
                "/opt/postgresql-synapse".into(),
                "/opt/postgresql-coturn".into(),
            ],
            compose_files: vec!["docker-compose.jitsi.yml".into(), "docker-compose.matrix.yml".into()],
            synapse_compose_file: "docker-compose.matrix.yml".into(),
        }
    }
}

/// External programs and their fixed argument prefixes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandsConfig {
    pub compose: Vec<String>,
    pub package_install: Vec<String>,
    pub runtime_packages: Vec<String>,
    pub certbot_packages: Vec<String>,
    pub certbot: String,
    pub proxy_reload: Vec<String>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            compose: vec!["docker-compose".into()],
            package_install: vec!["apt".into(), "install".into(), "-y".into()],
            runtime_packages: vec!["docker".into(), "docker-compose".into()],
            certbot_packages: vec!["certbot".into(), "python3-certbot-nginx".into()],
            certbot: "certbot".into(),
            proxy_reload: vec!["systemctl".into(), "reload".into(), "nginx".into()],
        }
    }
}

/// How external command failures are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecPolicy {
    /// Best-effort exec: exit status is ignored, output is returned and the
    /// run continues.
    #[default]
    BestEffort,
    /// Non-zero exit or launch failure aborts the run.
    Strict,
}

/// What to do when an existing structured config cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseFailurePolicy {
    /// Log the failure, leave the file untouched and continue.
    #[default]
    Continue,
    /// Abort the run.
    Fatal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub exec: ExecPolicy,
    pub structured_parse: ParseFailurePolicy,
    /// Seconds to wait after reloading the proxy.
    pub settle_delay_secs: u64,
    /// Attempts allowed for confirmed value entry.
    pub max_prompt_attempts: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            exec: ExecPolicy::default(),
            structured_parse: ParseFailurePolicy::default(),
            settle_delay_secs: 5,
            max_prompt_attempts: 5,
        }
    }
}

impl InstallerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.commands.compose.is_empty() {
            return Err(AppError::config_error("commands.compose must not be empty"));
        }
        if self.commands.package_install.is_empty() {
            return Err(AppError::config_error("commands.package_install must not be empty"));
        }
        if self.commands.proxy_reload.is_empty() {
            return Err(AppError::config_error("commands.proxy_reload must not be empty"));
        }
        if self.commands.certbot.trim().is_empty() {
            return Err(AppError::config_error("commands.certbot must not be empty"));
        }
        if self.paths.compose_files.is_empty() {
            return Err(AppError::config_error("paths.compose_files must not be empty"));
        }
        if self.policy.max_prompt_attempts == 0 {
            return Err(AppError::config_error("policy.max_prompt_attempts must be at least 1"));
        }
        Ok(())
    }
}

/// Parse and validate installer configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<InstallerConfig, AppError> {
    let config: InstallerConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
