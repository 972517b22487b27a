//! Ordered `KEY=VALUE` environment files.

use std::path::Path;

use crate::domain::AppError;

/// Environment file contents with template order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    /// Parse template content. Blank lines and `#` comments are skipped; every
    /// other line must contain exactly one `=`.
    pub fn parse(content: &str, source: &Path) -> Result<Self, AppError> {
        let mut env = EnvFile::default();
        for (index, raw) in content.lines().enumerate() {
            if raw.trim().is_empty() || raw.starts_with('#') {
                continue;
            }
            let mut parts = raw.split('=');
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(AppError::MalformedEnvLine {
                    path: source.to_path_buf(),
                    line_number: index + 1,
                    line: raw.to_string(),
                });
            };
            env.set(key, value);
        }
        Ok(env)
    }

    /// Replace the value of `key` in place, or append it if absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(existing, _)| existing == key).map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render one `KEY=VALUE` line per entry.
    pub fn render(&self) -> String {
        self.entries.iter().map(|(key, value)| format!("{key}={value}\n")).collect()
    }
}
