//! Default templates embedded in the binary.

use std::fs;
use std::path::Path;

use include_dir::{Dir, include_dir};
use tracing::info;

use crate::domain::{AppError, EnvArtifact};

static BUNDLED_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/bundled");

pub const NGINX_TEMPLATE: &str = "nginx-conf.template";
pub const SYGNAL_CONFIG: &str = "sygnal.yaml";

/// Asset name of the bundled env template for `artifact`.
pub fn env_template_name(artifact: EnvArtifact) -> String {
    format!("{}_template.env", artifact.name())
}

pub fn bundled_content(name: &str) -> Result<&'static str, AppError> {
    let file = BUNDLED_DIR
        .get_file(name)
        .ok_or_else(|| AppError::Internal { message: format!("Missing bundled template {name}") })?;
    file.contents_utf8()
        .ok_or_else(|| AppError::Internal { message: format!("Bundled template {name} is not UTF-8") })
}

/// Write the bundled asset `name` to `path` unless a file is already there.
/// Returns whether the file was written.
pub fn ensure_file(path: &Path, name: &str) -> Result<bool, AppError> {
    if path.exists() {
        return Ok(false);
    }
    let content = bundled_content(name)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    info!(path = %path.display(), "seeded bundled template {name}");
    Ok(true)
}
