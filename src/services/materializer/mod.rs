//! Per-service configuration files derived from an installation session.

mod proxy;
pub mod structured;
mod turn;

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::info;

use crate::domain::{
    AppError, EnvArtifact, EnvFile, InstallationSession, ParseFailurePolicy, SecretGenerator,
    StackLayout, Subdomain,
};
use crate::services::assets;

pub use proxy::{NGINX_PLACEHOLDER, render_proxy_config};
pub use structured::PatchOutcome;
pub use turn::render_turnserver_conf;

/// Push app registered in the gateway config.
pub const PUSH_APP_ID: &str = "im.vector.app.android";

/// Networks the homeserver may reach for URL previews and media.
pub const IP_RANGE_WHITELIST: [&str; 7] = [
    "127.0.0.1/8",
    "0.0.0.0/8",
    "10.0.0.0/8",
    "172.16.0.0/12",
    "192.168.0.0/16",
    "100.64.0.0/10",
    "169.254.0.0/16",
];

/// Writes every generated artifact for one session.
pub struct ConfigMaterializer<'a> {
    layout: &'a StackLayout,
    session: &'a InstallationSession,
    secrets: &'a SecretGenerator,
    parse_policy: ParseFailurePolicy,
}

impl<'a> ConfigMaterializer<'a> {
    pub fn new(
        layout: &'a StackLayout,
        session: &'a InstallationSession,
        secrets: &'a SecretGenerator,
        parse_policy: ParseFailurePolicy,
    ) -> Self {
        Self { layout, session, secrets, parse_policy }
    }

    /// Write all four env files. Returns the written paths.
    pub fn write_env_files(&self) -> Result<Vec<PathBuf>, AppError> {
        EnvArtifact::ALL.iter().map(|artifact| self.write_env(*artifact)).collect()
    }

    /// Load the template for `artifact`, apply session overrides and write it.
    pub fn write_env(&self, artifact: EnvArtifact) -> Result<PathBuf, AppError> {
        let template = self.layout.env_template(artifact);
        assets::ensure_file(&template, &assets::env_template_name(artifact))?;

        let mut env = EnvFile::parse(&fs::read_to_string(&template)?, &template)?;
        for (key, value) in self.env_overrides(artifact) {
            env.set(key, value);
        }

        let destination = self.layout.env_file(artifact);
        write_file(&destination, &env.render())?;
        info!(path = %destination.display(), keys = env.len(), "wrote {} env", artifact.name());
        Ok(destination)
    }

    fn env_overrides(&self, artifact: EnvArtifact) -> Vec<(&'static str, String)> {
        let session = self.session;
        match artifact {
            EnvArtifact::Common => vec![
                ("DOMAIN", session.domain().to_string()),
                ("ADMIN_EMAIL", session.email().to_string()),
                ("MATRIX_HOST", session.host(Subdomain::Matrix)),
                ("MEET_HOST", session.host(Subdomain::Meet)),
                ("API_HOST", session.host(Subdomain::Api)),
            ],
            EnvArtifact::Matrix => vec![
                ("POSTGRES_PASSWORD", session.synapse_db_password.clone()),
                ("VIRTUAL_HOST", session.host(Subdomain::Matrix)),
                ("LETSENCRYPT_HOST", session.host(Subdomain::Matrix)),
                ("SYNAPSE_SERVER_NAME", session.host(Subdomain::Matrix)),
            ],
            EnvArtifact::Jitsi => vec![
                ("JICOFO_AUTH_PASSWORD", self.secrets.password()),
                ("JVB_AUTH_PASSWORD", self.secrets.password()),
                ("JIGASI_XMPP_PASSWORD", self.secrets.password()),
                ("JIBRI_RECORDER_PASSWORD", self.secrets.password()),
                ("JIBRI_XMPP_PASSWORD", self.secrets.password()),
                ("PUBLIC_URL", session.url(Subdomain::Meet)),
                ("LETSENCRYPT_DOMAIN", session.host(Subdomain::Meet)),
                ("LETSENCRYPT_EMAIL", session.email().to_string()),
                ("ENABLE_LETSENCRYPT", "0".to_string()),
            ],
            EnvArtifact::Coturn => {
                vec![("POSTGRES_PASSWORD", session.coturn_db_password.clone())]
            }
        }
    }

    /// Write coturn's native `turnserver.conf`.
    pub fn write_turn_config(&self) -> Result<PathBuf, AppError> {
        let destination = self.layout.coturn_config();
        let content = render_turnserver_conf(self.session, &self.secrets.password());
        write_file(&destination, &content)?;
        info!(path = %destination.display(), "wrote TURN relay config");
        Ok(destination)
    }

    /// Render the nginx config from its template. Reloading is the caller's job.
    pub fn write_proxy_config(&self) -> Result<PathBuf, AppError> {
        let template = self.layout.nginx_template();
        assets::ensure_file(&template, assets::NGINX_TEMPLATE)?;

        let rendered = render_proxy_config(&fs::read_to_string(&template)?, self.session.domain());
        let destination = self.layout.nginx_config();
        write_file(&destination, &rendered)?;
        info!(path = %destination.display(), "wrote reverse proxy config");
        Ok(destination)
    }

    /// Patch the homeserver config generated by `synapse generate`.
    pub fn patch_synapse_config(&self) -> Result<PatchOutcome, AppError> {
        let session = self.session;
        structured::patch_yaml_file(&self.layout.synapse_config(), self.parse_policy, |config| {
            apply_synapse_settings(config, session);
            Ok(())
        })
    }

    /// Register the push app in the gateway config.
    pub fn patch_sygnal_config(&self) -> Result<PatchOutcome, AppError> {
        let path = self.layout.sygnal_config();
        assets::ensure_file(&path, assets::SYGNAL_CONFIG)?;
        structured::patch_yaml_file(&path, self.parse_policy, |config| {
            apply_push_app(config);
            Ok(())
        })
    }
}

/// Database, TURN and network policy for the homeserver.
pub fn apply_synapse_settings(config: &mut Mapping, session: &InstallationSession) {
    let matrix_host = session.host(Subdomain::Matrix);

    let mut args = Mapping::new();
    args.insert("user".into(), "synapse".into());
    args.insert("password".into(), session.synapse_db_password.clone().into());
    args.insert("host".into(), "localhost".into());
    args.insert("database".into(), "synapse".into());
    args.insert("cp_min".into(), 5.into());
    args.insert("cp_max".into(), 15.into());
    structured::update_section(config, "database", |database| {
        database.insert("name".into(), "psycopg2".into());
        database.insert("args".into(), Value::Mapping(args));
    });

    config.insert(
        "turn_uris".into(),
        structured::string_list([
            format!("turns:{matrix_host}?transport=udp"),
            format!("turns:{matrix_host}?transport=tcp"),
            format!("turn:{matrix_host}?transport=udp"),
            format!("turn:{matrix_host}?transport=tcp"),
        ]),
    );
    config.insert("enable_registration".into(), true.into());
    config.insert("turn_shared_secret".into(), session.turn_shared_secret.clone().into());
    config.insert("ip_range_whitelist".into(), structured::string_list(IP_RANGE_WHITELIST));
    config.insert("public_baseurl".into(), session.url(Subdomain::Matrix).into());
}

/// Insert or replace the push app entry. The API key is left for the operator.
pub fn apply_push_app(config: &mut Mapping) {
    let mut app = Mapping::new();
    app.insert("type".into(), "gcm".into());
    app.insert("api_key".into(), "".into());
    structured::update_section(config, "apps", |apps| {
        apps.insert(PUSH_APP_ID.into(), Value::Mapping(app));
    });
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
