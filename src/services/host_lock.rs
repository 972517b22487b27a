//! Marker recording which domain holds issued certificates on this host.

use std::fs;
use std::path::Path;

use crate::domain::AppError;

pub fn write_host_lock(path: &Path, domain: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, domain)?;
    Ok(())
}

/// Domain recorded in the lock. A missing lock is an error: callers must not
/// assume a certificate exists.
pub fn read_host_lock(path: &Path) -> Result<String, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let domain = content.lines().next().unwrap_or_default().trim().to_string();
            if domain.is_empty() {
                return Err(AppError::config_error(format!(
                    "Host lock {} is empty",
                    path.display()
                )));
            }
            Ok(domain)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::HostLockMissing { path: path.to_path_buf() })
        }
        Err(err) => Err(err.into()),
    }
}
