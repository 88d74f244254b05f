//! Color scheme palette table.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Palette size to ordered colors. Size-ordered so assignment can walk the
/// available palettes from the largest downward.
pub type ColorSchemes = BTreeMap<usize, Vec<String>>;

/// Read the line-oriented tab-separated color-scheme file, one palette per
/// line.
///
/// Blank lines are skipped. Colors are hex strings, so `#` does not start a
/// comment here. A line containing a blank entry is warned about and
/// skipped; a later line with the same number of colors replaces an
/// earlier one.
pub fn read_color_schemes(path: &Path) -> Result<ColorSchemes> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading color schemes file: {}", path.display()))?;

    let mut schemes = ColorSchemes::new();
    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split('\t').collect();
        if cells.iter().any(|cell| cell.trim().is_empty()) {
            tracing::warn!(
                "{}:{}: blank color entry, skipping scheme line {:?}",
                path.display(),
                idx + 1,
                line
            );
            continue;
        }
        let colors: Vec<String> = cells.iter().map(|cell| cell.trim().to_string()).collect();
        schemes.insert(colors.len(), colors);
    }
    Ok(schemes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_schemes_keyed_by_size() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("schemes.tsv");
        fs::write(
            &path,
            "#4575b4\n#4575b4\t#d73027\n#4575b4\t#fee090\t#d73027\n",
        )
        .expect("write schemes");

        let schemes = read_color_schemes(&path).expect("read schemes");
        assert_eq!(schemes.len(), 3);
        assert_eq!(schemes[&1], vec!["#4575b4"]);
        assert_eq!(schemes[&3], vec!["#4575b4", "#fee090", "#d73027"]);
    }

    #[test]
    fn test_blank_lines_skipped_and_same_width_replaced() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("schemes.tsv");
        fs::write(&path, "\n#aaaaaa\t#bbbbbb\n\n#111111\t#222222\n").expect("write schemes");

        let schemes = read_color_schemes(&path).expect("read schemes");
        assert_eq!(schemes.len(), 1);
        assert_eq!(schemes[&2], vec!["#111111", "#222222"]);
    }

    #[test]
    fn test_blank_entry_line_warned_and_skipped() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("schemes.tsv");
        fs::write(&path, "#aaaaaa\t\t#cccccc\n#111111\n").expect("write schemes");

        let schemes = read_color_schemes(&path).expect("read schemes");
        assert_eq!(schemes.len(), 1);
        assert_eq!(schemes[&1], vec!["#111111"]);
    }
}
