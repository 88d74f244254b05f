//! phylopipe: companion utilities for pathogen phylogenetics pipelines

use anyhow::Result;

fn main() -> Result<()> {
    phylopipe::cli::run()
}
