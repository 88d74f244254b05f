//! Trait ordering input and metadata filtering.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Trait-field name to ordered trait values, in file order.
pub type TraitOrdering = IndexMap<String, Vec<String>>;

/// Read the two-column tab-separated ordering file.
///
/// Blank lines and `#` comment lines are skipped; lines without exactly
/// two columns are warned about and skipped.
pub fn read_ordering(path: &Path) -> Result<TraitOrdering> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading ordering file: {}", path.display()))?;

    let mut ordering = TraitOrdering::new();
    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != 2 {
            tracing::warn!(
                "{}:{}: expected 2 tab-separated columns, found {}; skipping {:?}",
                path.display(),
                idx + 1,
                columns.len(),
                line
            );
            continue;
        }
        ordering
            .entry(columns[0].to_string())
            .or_default()
            .push(columns[1].to_string());
    }
    Ok(ordering)
}

/// A tab-separated metadata table with a header row.
pub struct Metadata {
    headers: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

/// Read a tab-separated metadata table.
pub fn read_metadata(path: &Path) -> Result<Metadata> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .from_path(path)
        .with_context(|| format!("Failed reading metadata table: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed reading metadata header: {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(
            record.with_context(|| format!("Malformed metadata row in {}", path.display()))?,
        );
    }

    Ok(Metadata { headers, rows })
}

impl Metadata {
    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Per-row focal flags, or `None` when the table has no strictly
    /// boolean `focal` column.
    fn focal_flags(&self) -> Option<Vec<bool>> {
        let focal = self.column_index("focal")?;
        let mut flags = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            match row.get(focal).unwrap_or("").trim().to_ascii_lowercase().as_str() {
                "true" => flags.push(true),
                "false" => flags.push(false),
                other => {
                    tracing::debug!(
                        "focal column is not strictly boolean (found {:?}), ignoring it",
                        other
                    );
                    return None;
                }
            }
        }
        Some(flags)
    }

    /// Distinct values present in `column`, restricted to focal rows when
    /// the focal filter is active. `None` when the column is absent.
    fn column_values(&self, column: &str) -> Option<HashSet<&str>> {
        let idx = self.column_index(column)?;
        let focal = self.focal_flags();
        let mut values = HashSet::new();
        for (row_idx, row) in self.rows.iter().enumerate() {
            if let Some(flags) = &focal {
                if !flags[row_idx] {
                    continue;
                }
            }
            if let Some(value) = row.get(idx) {
                values.insert(value);
            }
        }
        Some(values)
    }
}

/// Restrict each trait field's ordering to values present in the metadata
/// table's corresponding column. Fields without a corresponding column are
/// left untouched.
pub fn filter_ordering(ordering: &mut TraitOrdering, metadata: &Metadata) {
    for (field, values) in ordering.iter_mut() {
        match metadata.column_values(field) {
            Some(present) => values.retain(|value| present.contains(value.as_str())),
            None => {
                tracing::debug!("metadata has no {:?} column, leaving its ordering unfiltered", field);
            }
        }
    }
}
