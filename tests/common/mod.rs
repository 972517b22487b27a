//! Shared testing utilities for fedstack CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DOMAIN: &str = "example.com";
pub const EMAIL: &str = "admin@example.com";

const HOMESERVER: &str = "server_name: matrix.example.com\nreport_stats: true\ndatabase:\n  name: sqlite3\n  args:\n    database: /data/homeserver.db\n";

/// Isolated stack root whose external commands are all `true`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    stack: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self::with_commands("true", "true")
    }

    /// Use `compose` as the compose program and `other` for every other tool.
    pub fn with_commands(compose: &str, other: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let stack = root.path().join("stack");
        fs::create_dir_all(&stack).expect("Failed to create stack directory");

        let outside = root.path();
        let config = format!(
            r#"[paths]
letsencrypt_live_dir = '{live}'
database_volumes = ['{synapse_db}', '{coturn_db}']

[commands]
compose = ['{compose}']
package_install = ['{other}']
certbot = '{other}'
proxy_reload = ['{other}']

[policy]
settle_delay_secs = 0
"#,
            live = outside.join("letsencrypt/live").display(),
            synapse_db = outside.join("volumes/postgresql-synapse").display(),
            coturn_db = outside.join("volumes/postgresql-coturn").display(),
        );
        fs::write(stack.join("fedstack.toml"), config).expect("Failed to write config");

        Self { root, stack }
    }

    pub fn stack(&self) -> &Path {
        &self.stack
    }

    /// Build a command for the compiled binary rooted at the stack.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("fedstack").expect("Failed to locate fedstack binary");
        cmd.current_dir(&self.stack).arg("--root").arg(&self.stack);
        cmd
    }

    /// Place what `synapse generate` would have written.
    pub fn seed_homeserver(&self) {
        let path = self.stack.join("data/synapse/homeserver.yaml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, HOMESERVER).unwrap();
    }

    /// Place a certificate as certbot would after a successful issuance.
    pub fn seed_certificate(&self, domain: &str) {
        let lineage = self.root.path().join("letsencrypt/live").join(format!("api.{domain}"));
        fs::create_dir_all(&lineage).unwrap();
        fs::write(lineage.join("fullchain.pem"), "CERT").unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.stack.join(relative))
            .unwrap_or_else(|_| panic!("{relative} should be readable"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.stack.join(relative).exists()
    }

    pub fn install(&self) {
        self.seed_homeserver();
        self.seed_certificate(DOMAIN);
        self.cli()
            .args(["--install", "-y", "--domain", DOMAIN, "--email", EMAIL])
            .assert()
            .success();
    }
}
