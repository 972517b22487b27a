//! Resolved filesystem layout of a managed stack.

use std::path::{Path, PathBuf};

use crate::domain::config::PathsConfig;
use crate::domain::hosts;

/// Environment files written on install, by base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvArtifact {
    Common,
    Matrix,
    Jitsi,
    Coturn,
}

impl EnvArtifact {
    pub const ALL: [EnvArtifact; 4] =
        [EnvArtifact::Common, EnvArtifact::Matrix, EnvArtifact::Jitsi, EnvArtifact::Coturn];

    pub fn name(&self) -> &'static str {
        match self {
            EnvArtifact::Common => "common",
            EnvArtifact::Matrix => "matrix",
            EnvArtifact::Jitsi => "jitsi",
            EnvArtifact::Coturn => "coturn",
        }
    }
}

/// Absolute paths for one stack root.
#[derive(Debug, Clone)]
pub struct StackLayout {
    root: PathBuf,
    paths: PathsConfig,
}

impl StackLayout {
    pub fn new(root: impl Into<PathBuf>, paths: PathsConfig) -> Self {
        Self { root: root.into(), paths }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.resolve(&self.paths.data_dir)
    }

    pub fn env_file(&self, artifact: EnvArtifact) -> PathBuf {
        self.resolve(&self.paths.env_dir).join(format!("{}.env", artifact.name()))
    }

    pub fn env_template(&self, artifact: EnvArtifact) -> PathBuf {
        self.resolve(&self.paths.env_dir).join(format!("{}_template.env", artifact.name()))
    }

    pub fn coturn_config(&self) -> PathBuf {
        self.resolve(&self.paths.coturn_config)
    }

    pub fn nginx_template(&self) -> PathBuf {
        self.resolve(&self.paths.nginx_template)
    }

    pub fn nginx_config(&self) -> PathBuf {
        self.resolve(&self.paths.nginx_config)
    }

    pub fn synapse_config(&self) -> PathBuf {
        self.resolve(&self.paths.synapse_config)
    }

    pub fn sygnal_config(&self) -> PathBuf {
        self.resolve(&self.paths.sygnal_config)
    }

    pub fn media_dir(&self) -> PathBuf {
        self.resolve(&self.paths.media_dir)
    }

    pub fn progress_file(&self) -> PathBuf {
        self.resolve(&self.paths.progress_file)
    }

    pub fn host_lock(&self) -> PathBuf {
        self.resolve(&self.paths.host_lock)
    }

    pub fn log_file(&self) -> PathBuf {
        self.resolve(&self.paths.log_file)
    }

    pub fn database_volumes(&self) -> Vec<PathBuf> {
        self.paths.database_volumes.iter().map(|path| self.resolve(path)).collect()
    }

    /// Compose files as given in config; compose runs with the root as cwd.
    pub fn compose_files(&self) -> &[PathBuf] {
        &self.paths.compose_files
    }

    pub fn synapse_compose_file(&self) -> &Path {
        &self.paths.synapse_compose_file
    }

    /// Full chain of the certificate lineage for `domain`.
    pub fn certificate_file(&self, domain: &str) -> PathBuf {
        self.resolve(&self.paths.letsencrypt_live_dir)
            .join(hosts::certificate_name(domain))
            .join("fullchain.pem")
    }

    /// Config files produced by install that `remove` deletes. The host lock is
    /// not listed; it outlives the certificate it names.
    pub fn generated_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> =
            EnvArtifact::ALL.iter().map(|artifact| self.env_file(*artifact)).collect();
        files.push(self.coturn_config());
        files.push(self.nginx_config());
        files
    }

    /// Directories produced by install that `remove` deletes.
    pub fn generated_dirs(&self) -> Vec<PathBuf> {
        vec![self.data_dir(), self.media_dir()]
    }
}
