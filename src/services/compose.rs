//! docker-compose command lines for the managed stack.

use std::path::{Path, PathBuf};

/// Compose invocation over a fixed set of compose files.
#[derive(Debug, Clone)]
pub struct ComposeStack {
    program: Vec<String>,
    files: Vec<PathBuf>,
}

impl ComposeStack {
    pub fn new(program: &[String], files: &[PathBuf]) -> Self {
        Self { program: program.to_vec(), files: files.to_vec() }
    }

    /// Full argv for `compose -f ... <args>`.
    pub fn command(&self, args: &[&str]) -> Vec<String> {
        self.command_with_files(&self.files, args)
    }

    /// One-shot config generation for the homeserver.
    pub fn synapse_generate(&self, synapse_file: &Path) -> Vec<String> {
        self.command_with_files(&[synapse_file.to_path_buf()], &["run", "--rm", "synapse", "generate"])
    }

    fn command_with_files(&self, files: &[PathBuf], args: &[&str]) -> Vec<String> {
        let mut argv = self.program.clone();
        for file in files {
            argv.push("-f".to_string());
            argv.push(file.to_string_lossy().to_string());
        }
        argv.extend(args.iter().map(|arg| arg.to_string()));
        argv
    }
}
