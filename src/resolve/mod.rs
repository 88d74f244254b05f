//! Two-tier resolution of config-provided file paths.
//!
//! Paths named in pipeline configs are relative. They are looked up first
//! in the analysis directory, then under the workflow's bundled defaults
//! directory, and resolution fails loudly when neither location exists.

use crate::error::ResolveError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Conventional name of the bundled fallback directory.
pub const DEFAULTS_DIR: &str = "defaults";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex"));

/// Everything the resolver needs to turn a config-provided path template
/// into a usable path: where to look first, where the workflow's bundled
/// defaults live, and the per-task placeholder bindings.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    analysis_dir: PathBuf,
    base_dir: PathBuf,
    defaults_dir: Option<PathBuf>,
    substitutions: BTreeMap<String, String>,
}

impl ResolutionContext {
    pub fn new(analysis_dir: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            analysis_dir: analysis_dir.into(),
            base_dir: base_dir.into(),
            defaults_dir: None,
            substitutions: BTreeMap::new(),
        }
    }

    /// Use an explicit fallback directory instead of `<base_dir>/defaults`.
    pub fn with_defaults_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.defaults_dir = Some(dir.into());
        self
    }

    /// Placeholder bindings substituted into `{name}` tokens. Empty outside
    /// a per-task context.
    pub fn with_substitutions(mut self, bindings: BTreeMap<String, String>) -> Self {
        self.substitutions = bindings;
        self
    }

    /// Resolve a path template against the analysis directory, falling back
    /// to the defaults directory.
    ///
    /// When the substituted path exists relative to the analysis directory
    /// it is returned unchanged; otherwise the defaults-relative location
    /// is probed and returned when it exists.
    pub fn resolve(&self, template: &str) -> Result<String, ResolveError> {
        let substituted = self.substitute(template)?;

        let primary = self.analysis_dir.join(&substituted);
        if primary.exists() {
            return Ok(substituted);
        }

        let fallback = self.fallback_path(&substituted);
        if fallback.exists() {
            return Ok(fallback.display().to_string());
        }

        Err(ResolveError::Unresolved {
            template: template.to_string(),
            primary: primary.display().to_string(),
            fallback: fallback.display().to_string(),
        })
    }

    fn substitute(&self, template: &str) -> Result<String, ResolveError> {
        let mut out = String::with_capacity(template.len());
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(template) {
            let whole = caps.get(0).expect("capture 0 always present");
            let name = &caps[1];
            let Some(value) = self.substitutions.get(name) else {
                return Err(ResolveError::MissingSubstitution {
                    placeholder: name.to_string(),
                    template: template.to_string(),
                    available: self.available_bindings(),
                });
            };
            out.push_str(&template[last..whole.start()]);
            out.push_str(value);
            last = whole.end();
        }
        out.push_str(&template[last..]);
        Ok(out)
    }

    fn available_bindings(&self) -> String {
        if self.substitutions.is_empty() {
            "(none)".to_string()
        } else {
            self.substitutions.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }

    fn fallback_path(&self, substituted: &str) -> PathBuf {
        if let Some(dir) = &self.defaults_dir {
            return dir.join(substituted);
        }
        // A path already naming the defaults directory is joined straight
        // under the base directory.
        if Path::new(substituted).starts_with(DEFAULTS_DIR) {
            self.base_dir.join(substituted)
        } else {
            self.base_dir.join(DEFAULTS_DIR).join(substituted)
        }
    }
}
