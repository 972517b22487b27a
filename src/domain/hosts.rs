use std::fmt;

/// Public subdomains served under the installation domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subdomain {
    /// Push gateway and auxiliary APIs. First name on the certificate.
    Api,
    /// Synapse homeserver and TURN realm.
    Matrix,
    /// Jitsi Meet.
    Meet,
}

impl Subdomain {
    /// All subdomains in certificate request order.
    pub const ALL: [Subdomain; 3] = [Subdomain::Api, Subdomain::Matrix, Subdomain::Meet];

    /// The subdomain certbot names the certificate lineage after.
    pub const PRIMARY: Subdomain = Subdomain::Api;

    pub fn label(&self) -> &'static str {
        match self {
            Subdomain::Api => "api",
            Subdomain::Matrix => "matrix",
            Subdomain::Meet => "meet",
        }
    }

    /// Fully qualified host name under `domain`.
    pub fn host(&self, domain: &str) -> String {
        format!("{}.{}", self.label(), domain)
    }

    /// `https://` base URL for this host.
    pub fn url(&self, domain: &str) -> String {
        format!("https://{}", self.host(domain))
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Host names requested on the certificate, in request order.
pub fn certificate_hosts(domain: &str) -> Vec<String> {
    Subdomain::ALL.iter().map(|subdomain| subdomain.host(domain)).collect()
}

/// Certificate lineage name for `domain`.
pub fn certificate_name(domain: &str) -> String {
    Subdomain::PRIMARY.host(domain)
}
