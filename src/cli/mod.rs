//! Command-line interface for phylopipe
//!
//! Provides `resolve-config` and `assign-colors` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod colors;
mod resolve;
mod utils;

/// Companion utilities for pathogen phylogenetics pipeline runs
#[derive(Parser)]
#[command(name = "phylopipe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge config sources and resolve config-provided paths
    ResolveConfig(Box<resolve::ResolveConfigArgs>),

    /// Assign palette colors to ordered trait values
    AssignColors(colors::AssignColorsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::ResolveConfig(args) => resolve::run(*args),
        Commands::AssignColors(args) => colors::run(args),
    }
}
