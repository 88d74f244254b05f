//! Shared CLI utilities.

use anyhow::Result;
use serde_yaml::Value;

/// Split a `NAME=VALUE` flag into its two halves.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let Some((name, value)) = raw.split_once('=') else {
        anyhow::bail!("Expected NAME=VALUE, got {:?}", raw);
    };
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Expected NAME=VALUE, got {:?}", raw);
    }
    Ok((name.to_string(), value.to_string()))
}

/// Parse a `--set KEY=VALUE` override, reading VALUE as YAML so numbers
/// and booleans keep their types. An unparseable VALUE stays a plain
/// string.
pub fn parse_override(raw: &str) -> Result<(String, Value)> {
    let (key, value) = parse_assignment(raw)?;
    let parsed = serde_yaml::from_str(&value).unwrap_or(Value::String(value));
    Ok((key, parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment_splits_on_first_equals() {
        let (name, value) = parse_assignment("segment=h3n2=v2").expect("parse");
        assert_eq!(name, "segment");
        assert_eq!(value, "h3n2=v2");
    }

    #[test]
    fn test_parse_assignment_rejects_missing_equals() {
        assert!(parse_assignment("segment").is_err());
        assert!(parse_assignment("=value").is_err());
    }

    #[test]
    fn test_parse_override_keeps_yaml_types() {
        let (_, threads) = parse_override("threads=8").expect("parse");
        assert_eq!(threads, Value::Number(8.into()));

        let (_, flag) = parse_override("trim=true").expect("parse");
        assert_eq!(flag, Value::Bool(true));

        let (_, name) = parse_override("name=h3n2").expect("parse");
        assert_eq!(name, Value::String("h3n2".to_string()));
    }
}
