//! Pairing ordered trait values with palette colors.

use super::ordering::TraitOrdering;
use super::schemes::ColorSchemes;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Color assignments for one trait field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitColors {
    pub field: String,
    /// `(trait value, color)` pairs in ordering-file order.
    pub pairs: Vec<(String, String)>,
}

/// Pair every trait value with a palette color, positionally.
///
/// Fields reduced to zero values are skipped with a diagnostic. A field
/// needing more colors than the largest palette provides falls back to
/// repeated palette concatenation and continues with reused colors.
pub fn assign_colors(
    ordering: &TraitOrdering,
    schemes: &ColorSchemes,
) -> Result<Vec<TraitColors>> {
    let mut assignments = Vec::new();
    for (field, values) in ordering {
        if values.is_empty() {
            tracing::warn!("no usable values for trait field {:?}, skipping it", field);
            continue;
        }
        let palette = palette_for(field, values.len(), schemes)?;
        let pairs = values.iter().cloned().zip(palette).collect();
        assignments.push(TraitColors { field: field.clone(), pairs });
    }
    Ok(assignments)
}

/// Choose `needed` colors for `field` from the available palettes.
fn palette_for(field: &str, needed: usize, schemes: &ColorSchemes) -> Result<Vec<String>> {
    if let Some(palette) = schemes.get(&needed) {
        return Ok(palette.clone());
    }

    // No exact-size palette; the head of the next larger one still gives
    // distinct colors.
    if let Some((size, palette)) = schemes.range(needed..).next() {
        tracing::debug!(
            "no {}-color scheme for {:?}, using the first {} colors of the {}-color scheme",
            needed,
            field,
            needed,
            size
        );
        return Ok(palette[..needed].to_vec());
    }

    let largest = *schemes
        .keys()
        .next_back()
        .with_context(|| format!("no color schemes available to color trait field {field:?}"))?;
    tracing::warn!(
        "trait field {:?} needs {} colors but the largest scheme has {}; colors will be reused",
        field,
        needed,
        largest
    );

    let mut colors = Vec::with_capacity(needed);
    // Concatenate palettes from the largest size downward, cycling, until
    // the field is covered.
    for (_, palette) in schemes.iter().rev().cycle() {
        if colors.len() >= needed {
            break;
        }
        colors.extend_from_slice(palette);
    }
    colors.truncate(needed);
    Ok(colors)
}

/// Write the tab-separated colors table: one `field\tvalue\tcolor` row per
/// pair, one blank line after each trait-field group.
pub fn write_colors(path: &Path, assignments: &[TraitColors]) -> Result<()> {
    let mut out = String::new();
    for TraitColors { field, pairs } in assignments {
        for (value, color) in pairs {
            out.push_str(field);
            out.push('\t');
            out.push_str(value);
            out.push('\t');
            out.push_str(color);
            out.push('\n');
        }
        out.push('\n');
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed creating output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, out)
        .with_context(|| format!("Failed writing colors file: {}", path.display()))?;

    tracing::info!("wrote color assignments to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ordering(entries: &[(&str, &[&str])]) -> TraitOrdering {
        entries
            .iter()
            .map(|(field, values)| {
                (field.to_string(), values.iter().map(|v| v.to_string()).collect())
            })
            .collect()
    }

    fn schemes(palettes: &[&[&str]]) -> ColorSchemes {
        palettes
            .iter()
            .map(|palette| {
                (palette.len(), palette.iter().map(|c| c.to_string()).collect::<Vec<_>>())
            })
            .collect()
    }

    #[test]
    fn test_exact_palette_paired_positionally() {
        let ordering = ordering(&[("region", &["asia", "europe", "africa"])]);
        let schemes = schemes(&[&["#111111"], &["#111111", "#222222"], &["#111111", "#222222", "#333333"]]);

        let assigned = assign_colors(&ordering, &schemes).expect("assign");
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].field, "region");
        assert_eq!(
            assigned[0].pairs,
            vec![
                ("asia".to_string(), "#111111".to_string()),
                ("europe".to_string(), "#222222".to_string()),
                ("africa".to_string(), "#333333".to_string()),
            ]
        );
    }

    #[test]
    fn test_overflow_reuses_colors_from_largest_palette_down() {
        let ordering = ordering(&[("host", &["a", "b", "c", "d", "e"])]);
        let schemes = schemes(&[&["#1", "#2", "#3"], &["#4", "#5"]]);

        let assigned = assign_colors(&ordering, &schemes).expect("assign");
        let colors: Vec<&str> =
            assigned[0].pairs.iter().map(|(_, color)| color.as_str()).collect();
        // Largest palette first, then the next size down.
        assert_eq!(colors, ["#1", "#2", "#3", "#4", "#5"]);
    }

    #[test]
    fn test_overflow_with_single_palette_cycles_it() {
        let ordering = ordering(&[("host", &["a", "b", "c", "d", "e"])]);
        let schemes = schemes(&[&["#1", "#2", "#3"]]);

        let assigned = assign_colors(&ordering, &schemes).expect("assign");
        let colors: Vec<&str> =
            assigned[0].pairs.iter().map(|(_, color)| color.as_str()).collect();
        assert_eq!(colors, ["#1", "#2", "#3", "#1", "#2"]);
    }

    #[test]
    fn test_size_gap_truncates_next_larger_palette() {
        let ordering = ordering(&[("region", &["asia", "europe", "africa"])]);
        let schemes = schemes(&[&["#1", "#2"], &["#1", "#2", "#3", "#4"]]);

        let assigned = assign_colors(&ordering, &schemes).expect("assign");
        let colors: Vec<&str> =
            assigned[0].pairs.iter().map(|(_, color)| color.as_str()).collect();
        assert_eq!(colors, ["#1", "#2", "#3"]);
    }

    #[test]
    fn test_empty_field_skipped() {
        let ordering = ordering(&[("region", &[]), ("host", &["human"])]);
        let schemes = schemes(&[&["#1"]]);

        let assigned = assign_colors(&ordering, &schemes).expect("assign");
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].field, "host");
    }

    #[test]
    fn test_no_schemes_at_all_is_fatal() {
        let ordering = ordering(&[("region", &["asia"])]);
        let schemes = ColorSchemes::new();

        let err = assign_colors(&ordering, &schemes).expect_err("should fail");
        assert!(format!("{err:#}").contains("no color schemes"));
    }

    #[test]
    fn test_write_colors_groups_with_blank_lines() {
        let tmp = TempDir::new().expect("tmp");
        let dest = tmp.path().join("colors.tsv");
        let assignments = vec![
            TraitColors {
                field: "region".to_string(),
                pairs: vec![
                    ("asia".to_string(), "#111111".to_string()),
                    ("europe".to_string(), "#222222".to_string()),
                ],
            },
            TraitColors {
                field: "host".to_string(),
                pairs: vec![("human".to_string(), "#333333".to_string())],
            },
        ];

        write_colors(&dest, &assignments).expect("write colors");
        let written = fs::read_to_string(&dest).expect("read back");
        assert_eq!(
            written,
            "region\tasia\t#111111\nregion\teurope\t#222222\n\nhost\thuman\t#333333\n\n"
        );
    }
}
