//! resolve-config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::utils::{parse_assignment, parse_override};
use crate::config::{load_merged_config, resolve_config_paths, write_config, KeyPath};
use crate::resolve::ResolutionContext;

#[derive(Args)]
pub struct ResolveConfigArgs {
    /// Analysis directory searched first for config-provided paths
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub analysis_dir: PathBuf,

    /// Workflow installation root holding the bundled defaults directory
    #[arg(long, value_name = "DIR")]
    pub base_dir: PathBuf,

    /// Explicit fallback directory, overriding <BASE_DIR>/defaults
    #[arg(long, value_name = "DIR")]
    pub defaults_dir: Option<PathBuf>,

    /// Workflow-defined config file, lowest precedence (repeatable)
    #[arg(long = "workflow-config", value_name = "FILE")]
    pub workflow_configs: Vec<PathBuf>,

    /// User config file, applied after workflow configs in the given order
    #[arg(long = "config", value_name = "FILE")]
    pub user_configs: Vec<PathBuf>,

    /// Top-level override, KEY=VALUE with VALUE parsed as YAML (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Dot-separated key path to resolve, `*` matching every key (repeatable)
    #[arg(long = "resolve", value_name = "KEYPATH")]
    pub resolve: Vec<String>,

    /// Placeholder binding for `{name}` tokens in path templates (repeatable)
    #[arg(long = "bind", value_name = "NAME=VALUE")]
    pub bindings: Vec<String>,

    /// Where to write the merged config snapshot (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ResolveConfigArgs) -> Result<()> {
    if !args.base_dir.is_dir() {
        anyhow::bail!("Base directory does not exist: {}", args.base_dir.display());
    }

    let overrides = args
        .overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<Result<Vec<_>>>()?;
    let key_paths = args
        .resolve
        .iter()
        .map(|raw| raw.parse::<KeyPath>())
        .collect::<Result<Vec<_>>>()?;
    let bindings = args
        .bindings
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<BTreeMap<_, _>>>()?;

    let mut config = load_merged_config(&args.workflow_configs, &args.user_configs, &overrides)?;

    let mut ctx = ResolutionContext::new(&args.analysis_dir, &args.base_dir)
        .with_substitutions(bindings);
    if let Some(dir) = &args.defaults_dir {
        ctx = ctx.with_defaults_dir(dir);
    }

    resolve_config_paths(&mut config, &key_paths, &ctx)?;

    match &args.output {
        Some(path) => write_config(path, &config)?,
        None => {
            let yaml =
                serde_yaml::to_string(&config).context("Failed serializing merged config")?;
            print!("{yaml}");
        }
    }

    Ok(())
}
