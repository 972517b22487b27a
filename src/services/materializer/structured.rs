//! Parse, mutate and write back YAML configs that other tools generate.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::{error, info};

use crate::domain::{AppError, ParseFailurePolicy};

/// Result of a structured patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Patched,
    /// The file could not be used and the policy allowed continuing.
    Skipped { reason: String },
}

/// Read `path` as a YAML mapping, apply `patch`, and write it back.
///
/// Keys the patch does not touch are written back unchanged. A file that cannot
/// be read, fails to parse, or is not a mapping is handled according to `policy`.
pub fn patch_yaml_file<F>(
    path: &Path,
    policy: ParseFailurePolicy,
    patch: F,
) -> Result<PatchOutcome, AppError>
where
    F: FnOnce(&mut Mapping) -> Result<(), AppError>,
{
    let mut mapping = match load_mapping(path) {
        Ok(mapping) => mapping,
        Err(err) => {
            error!(path = %path.display(), "failed to load structured config: {err}");
            return match policy {
                ParseFailurePolicy::Fatal => Err(err),
                ParseFailurePolicy::Continue => Ok(PatchOutcome::Skipped { reason: err.to_string() }),
            };
        }
    };

    patch(&mut mapping)?;
    fs::write(path, serde_yaml::to_string(&Value::Mapping(mapping))?)?;
    info!(path = %path.display(), "patched structured config");
    Ok(PatchOutcome::Patched)
}

fn load_mapping(path: &Path) -> Result<Mapping, AppError> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(AppError::UnexpectedStructure {
            path: path.to_path_buf(),
            reason: "top level is not a mapping".to_string(),
        }),
    }
}

/// Apply `update` to the mapping stored under `key`. A missing or non-mapping
/// value is replaced by an empty mapping; an existing key keeps its position.
pub fn update_section<F>(config: &mut Mapping, key: &str, update: F)
where
    F: FnOnce(&mut Mapping),
{
    let mut section = match config.get_mut(key).map(std::mem::take) {
        Some(Value::Mapping(mapping)) => mapping,
        _ => Mapping::new(),
    };
    update(&mut section);
    config.insert(Value::from(key), Value::Mapping(section));
}

/// Build a YAML string sequence.
pub fn string_list<I, S>(items: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Sequence(items.into_iter().map(|item| Value::String(item.into())).collect())
}
