use std::fs;

use tempfile::TempDir;

use crate::app::AppContext;
use crate::domain::config::InstallerConfig;
use crate::domain::{SecretGenerator, StackLayout};
use crate::testing::{RecordingRunner, ScriptedPrompter};

pub const GENERATED_HOMESERVER: &str = "server_name: matrix.example.com\nreport_stats: true\ndatabase:\n  name: sqlite3\n  args:\n    database: /data/homeserver.db\n";

/// Stack rooted in a temp dir, with every absolute path redirected inside it.
pub struct Stack {
    pub dir: TempDir,
    pub ctx: AppContext<RecordingRunner, ScriptedPrompter>,
}

impl Stack {
    pub fn runner(&self) -> &RecordingRunner {
        self.ctx.runner()
    }

    /// Make `certbot certonly` drop the certificate file, like a real issuance.
    pub fn issue_certificates_on_request(&self) {
        let live_dir = self.dir.path().join("letsencrypt/live");
        self.runner().on(&["certbot", "certonly"], move |argv| {
            let name = argv.windows(2).find(|pair| pair[0] == "-d").map(|pair| pair[1].clone());
            if let Some(name) = name {
                let lineage = live_dir.join(name);
                fs::create_dir_all(&lineage).unwrap();
                fs::write(lineage.join("fullchain.pem"), "CERT").unwrap();
            }
        });
    }

    /// Override what `synapse generate` writes.
    pub fn generate_synapse_config_with(&self, content: &'static str) {
        let path = self.ctx.layout().synapse_config();
        self.runner().on(&["synapse", "generate"], move |_| {
            fs::write(&path, content).unwrap();
        });
    }
}

/// Build a stack whose prompter answers `inputs` and accepts confirmations.
pub fn stack(inputs: &[&str]) -> Stack {
    stack_with_confirmations(inputs, &[true, true, true])
}

pub fn stack_with_confirmations(inputs: &[&str], confirmations: &[bool]) -> Stack {
    let dir = TempDir::new().unwrap();
    let mut config = InstallerConfig::default();
    config.paths.letsencrypt_live_dir = dir.path().join("letsencrypt/live");
    config.paths.database_volumes =
        vec![dir.path().join("volumes/postgresql-synapse"), dir.path().join("volumes/postgresql-coturn")];
    config.policy.settle_delay_secs = 0;

    let layout = StackLayout::new(dir.path().join("stack"), config.paths.clone());
    let ctx = AppContext::new(
        layout,
        config,
        RecordingRunner::new(),
        ScriptedPrompter::new(inputs, confirmations),
        SecretGenerator::seeded(42),
    );

    let homeserver = ctx.layout().synapse_config();
    ctx.runner().on(&["synapse", "generate"], move |_| {
        fs::create_dir_all(homeserver.parent().unwrap()).unwrap();
        fs::write(&homeserver, GENERATED_HOMESERVER).unwrap();
    });

    Stack { dir, ctx }
}
