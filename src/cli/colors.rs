//! assign-colors command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::colors::{
    assign_colors, filter_ordering, read_color_schemes, read_metadata, read_ordering,
    write_colors,
};

#[derive(Args)]
pub struct AssignColorsArgs {
    /// Two-column tab-separated ordering file (trait field, trait value)
    #[arg(long, value_name = "FILE")]
    pub ordering: PathBuf,

    /// Tab-separated color-scheme file, one palette per line
    #[arg(long, value_name = "FILE")]
    pub color_schemes: PathBuf,

    /// Tab-separated metadata table used to filter trait values
    #[arg(long, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// Destination for the tab-separated colors file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

pub fn run(args: AssignColorsArgs) -> Result<()> {
    let mut ordering = read_ordering(&args.ordering)?;

    if let Some(metadata_path) = &args.metadata {
        let metadata = read_metadata(metadata_path)?;
        filter_ordering(&mut ordering, &metadata);
    }

    let schemes = read_color_schemes(&args.color_schemes)?;
    let assignments = assign_colors(&ordering, &schemes)?;
    write_colors(&args.output, &assignments)?;

    Ok(())
}
