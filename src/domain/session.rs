use crate::domain::SecretGenerator;
use crate::domain::hosts::Subdomain;

/// State for one install run: the collected identity plus the secrets shared
/// between several generated config files.
///
/// Secrets are generated once at construction and never regenerated within the
/// run; they are only persisted through the files written from them.
#[derive(Debug, Clone)]
pub struct InstallationSession {
    domain: String,
    email: String,
    pub synapse_db_password: String,
    pub turn_shared_secret: String,
    pub coturn_db_password: String,
}

impl InstallationSession {
    pub fn new(secrets: &SecretGenerator) -> Self {
        Self {
            domain: String::new(),
            email: String::new(),
            synapse_db_password: secrets.password(),
            turn_shared_secret: secrets.shared_secret(),
            coturn_db_password: secrets.password(),
        }
    }

    /// Record the domain and email once they have been collected.
    pub fn identify(&mut self, domain: impl Into<String>, email: impl Into<String>) {
        self.domain = domain.into();
        self.email = email.into();
    }

    /// Domain, empty until collected.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Email, empty until collected.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn host(&self, subdomain: Subdomain) -> String {
        subdomain.host(&self.domain)
    }

    pub fn url(&self, subdomain: Subdomain) -> String {
        subdomain.url(&self.domain)
    }
}
