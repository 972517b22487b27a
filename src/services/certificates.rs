//! certbot command lines.

use crate::domain::hosts;

/// Request one certificate covering every public subdomain, through the
/// nginx plugin.
pub fn issue_command(certbot: &str, email: &str, domain: &str) -> Vec<String> {
    let mut argv: Vec<String> = [certbot, "certonly", "--nginx", "-n", "--agree-tos", "--email", email]
        .iter()
        .map(|arg| arg.to_string())
        .collect();
    for host in hosts::certificate_hosts(domain) {
        argv.push("-d".to_string());
        argv.push(host);
    }
    argv.push("--expand".to_string());
    argv
}

pub fn renew_command(certbot: &str, domain: &str) -> Vec<String> {
    vec![
        certbot.to_string(),
        "renew".to_string(),
        "--cert-name".to_string(),
        hosts::certificate_name(domain),
        "-n".to_string(),
    ]
}

pub fn delete_command(certbot: &str, domain: &str) -> Vec<String> {
    vec![
        certbot.to_string(),
        "delete".to_string(),
        "--cert-name".to_string(),
        hosts::certificate_name(domain),
        "-n".to_string(),
    ]
}

/// Host names passed with `-d` in a certbot command line.
pub fn requested_hosts(argv: &[String]) -> Vec<String> {
    argv.windows(2).filter(|pair| pair[0] == "-d").map(|pair| pair[1].clone()).collect()
}
