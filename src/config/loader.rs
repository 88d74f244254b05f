//! Layered loading of workflow and user config files.

use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Merge workflow configs, user configs, and explicit overrides into one
/// mapping.
///
/// Workflow-defined files also present in the user list are skipped so the
/// user's copy is applied at its higher-precedence position. Overrides are
/// applied last, with the same whole-value replacement semantics.
pub fn load_merged_config(
    workflow_configs: &[PathBuf],
    user_configs: &[PathBuf],
    overrides: &[(String, Value)],
) -> Result<Mapping> {
    let mut merged = Mapping::new();

    let workflow_only = workflow_configs.iter().filter(|&path| !user_configs.contains(path));
    for path in workflow_only.chain(user_configs.iter()) {
        let layer = load_config_file(path)?;
        for (key, value) in layer {
            merged.insert(key, value);
        }
    }

    for (key, value) in overrides {
        merged.insert(Value::String(key.clone()), value.clone());
    }

    Ok(merged)
}

/// Load a single YAML config file as a top-level mapping. An empty file
/// counts as an empty mapping.
pub fn load_config_file(path: &Path) -> Result<Mapping> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading config file: {}", path.display()))?;

    let raw: Value = serde_yaml::from_str(&content)
        .with_context(|| format!("Invalid YAML syntax: {}", path.display()))?;

    match raw {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => anyhow::bail!(
            "Config file {} must hold a top-level mapping, found {}",
            path.display(),
            value_kind(&other),
        ),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
