//! Merged config snapshot writing.

use anyhow::{Context, Result};
use serde_yaml::Mapping;
use std::fs;
use std::path::Path;

/// Serialize the merged config as YAML and write it, keys in insertion
/// order. The destination directory is created when missing.
pub fn write_config(path: &Path, config: &Mapping) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed serializing merged config")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed creating output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, yaml)
        .with_context(|| format!("Failed writing config snapshot: {}", path.display()))?;

    tracing::info!("wrote merged config to {}", path.display());
    Ok(())
}
