//! Recursive key-path traversal that resolves path values in place.

use crate::error::ResolveError;
use crate::resolve::ResolutionContext;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::str::FromStr;

/// One step of a key path: a literal key, or `*` meaning every key present
/// at that level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStep {
    Literal(String),
    Wildcard,
}

/// A dot-separated walk into the config mapping, e.g. `files.*.include`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath(pub Vec<KeyStep>);

impl FromStr for KeyPath {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let steps = raw
            .split('.')
            .map(|segment| match segment {
                "" => anyhow::bail!("Empty segment in key path {:?}", raw),
                "*" => Ok(KeyStep::Wildcard),
                literal => Ok(KeyStep::Literal(literal.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(KeyPath(steps))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, step) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            match step {
                KeyStep::Wildcard => f.write_str("*")?,
                KeyStep::Literal(name) => f.write_str(name)?,
            }
        }
        Ok(())
    }
}

/// Walk every key path through the config and resolve the terminal values
/// in place via the path resolver.
///
/// Absent literal keys are optional and skipped; a wildcard visits every
/// key at its level but only descends into nested mappings. Terminal
/// values must be strings or lists of strings.
pub fn resolve_config_paths(
    config: &mut Mapping,
    key_paths: &[KeyPath],
    ctx: &ResolutionContext,
) -> Result<(), ResolveError> {
    for key_path in key_paths {
        walk(config, &key_path.0, &mut Vec::new(), ctx)?;
    }
    Ok(())
}

fn walk(
    level: &mut Mapping,
    steps: &[KeyStep],
    trail: &mut Vec<String>,
    ctx: &ResolutionContext,
) -> Result<(), ResolveError> {
    let Some((step, rest)) = steps.split_first() else {
        return Ok(());
    };

    match step {
        KeyStep::Wildcard => {
            for (key, value) in level.iter_mut() {
                trail.push(key_display(key));
                step_into(value, rest, trail, ctx)?;
                trail.pop();
            }
        }
        KeyStep::Literal(name) => {
            trail.push(name.clone());
            match level.get_mut(&Value::String(name.clone())) {
                Some(value) => step_into(value, rest, trail, ctx)?,
                None => {
                    tracing::debug!("config has no {:?}, skipping", trail.join("."));
                }
            }
            trail.pop();
        }
    }
    Ok(())
}

fn step_into(
    value: &mut Value,
    rest: &[KeyStep],
    trail: &mut Vec<String>,
    ctx: &ResolutionContext,
) -> Result<(), ResolveError> {
    if rest.is_empty() {
        return resolve_terminal(value, trail, ctx);
    }
    match value {
        Value::Mapping(nested) => walk(nested, rest, trail, ctx),
        _ => {
            tracing::debug!("config.{} is not a mapping, skipping", trail.join("."));
            Ok(())
        }
    }
}

fn resolve_terminal(
    value: &mut Value,
    trail: &[String],
    ctx: &ResolutionContext,
) -> Result<(), ResolveError> {
    let key_path = trail.join(".");
    match value {
        Value::String(template) => {
            let resolved = ctx.resolve(template)?;
            tracing::info!("resolved config.{}: {:?} -> {:?}", key_path, template, resolved);
            *value = Value::String(resolved);
            Ok(())
        }
        Value::Sequence(items) => {
            let mut resolved_items = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                let Value::String(template) = item else {
                    return Err(type_mismatch(&key_path, item));
                };
                let resolved = ctx.resolve(template)?;
                tracing::info!(
                    "resolved config.{}[{}]: {:?} -> {:?}",
                    key_path,
                    idx,
                    template,
                    resolved
                );
                resolved_items.push(Value::String(resolved));
            }
            *value = Value::Sequence(resolved_items);
            Ok(())
        }
        other => Err(type_mismatch(&key_path, other)),
    }
}

fn type_mismatch(key_path: &str, value: &Value) -> ResolveError {
    ResolveError::TypeMismatch {
        key_path: key_path.to_string(),
        found: super::loader::value_kind(value),
    }
}

fn key_display(key: &Value) -> String {
    match key {
        Value::String(name) => name.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => format!("{other:?}"),
    }
}
