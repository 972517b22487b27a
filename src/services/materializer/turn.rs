use crate::domain::{InstallationSession, Subdomain};

/// coturn configuration using the shared TURN secret and its own Postgres
/// user database.
pub fn render_turnserver_conf(session: &InstallationSession, cli_password: &str) -> String {
    let lines = [
        "listening-port=3478".to_string(),
        "tls-listening-port=5349".to_string(),
        "external-ip=".to_string(),
        "min-port=49152".to_string(),
        "max-port=65535".to_string(),
        "verbose".to_string(),
        "fingerprint".to_string(),
        "lt-cred-mech".to_string(),
        "use-auth-secret".to_string(),
        format!("static-auth-secret={}", session.turn_shared_secret),
        format!(
            "psql-userdb=\"host=localhost port=15432 dbname=coturn user=coturn password={} connect_timeout=60\"",
            session.coturn_db_password
        ),
        format!("realm={}", session.host(Subdomain::Matrix)),
        "cert=/etc/ssl/certs/cert.pem".to_string(),
        "pkey=/etc/ssl/private/privkey.pem".to_string(),
        "syslog".to_string(),
        "cli-ip=127.0.0.1".to_string(),
        "cli-port=5766".to_string(),
        format!("cli-password={cli_password}"),
    ];
    lines.iter().map(|line| format!("{line}\n")).collect()
}
