//! Information-content counts files.
//!
//! Layout: an optional `wnver::...` header line, then one
//! `<synset-name> <count> [ROOT]` line per synset. IC is derived as
//! `-ln(count / total)` where `total` sums the counts of ROOT lines.

use std::collections::HashMap;
use std::path::Path;

use crate::graph::Taxonomy;
use crate::types::{WsdError, WsdResult, IC_HEADER_PREFIX, ROOT_MARKER};

/// Frequency counts parsed from an IC file.
#[derive(Debug, Clone, Default)]
pub struct IcCounts {
    /// Header line, if present.
    pub header: Option<String>,
    counts: HashMap<String, f64>,
    /// Names flagged ROOT, in file order.
    roots: Vec<String>,
}

/// What applying counts to a taxonomy did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IcSummary {
    /// Synsets that received a positive IC.
    pub assigned: usize,
    /// Synsets with no (or zero) count, left at IC 0.
    pub unseen: usize,
    /// Count lines naming synsets the taxonomy does not have.
    pub skipped: usize,
}

impl IcCounts {
    /// Read a counts file.
    pub fn read_from_file(path: &Path) -> WsdResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse counts from text.
    pub fn parse(text: &str) -> WsdResult<Self> {
        let mut result = IcCounts::default();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if idx == 0 && line.starts_with(IC_HEADER_PREFIX) {
                result.header = Some(line.to_string());
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let (name, count, is_root) = match fields.as_slice() {
                [name, count] => (*name, *count, false),
                [name, count, marker] if *marker == ROOT_MARKER => (*name, *count, true),
                [_, _, marker] => {
                    return Err(malformed(line_no, format!("unexpected marker {:?}", marker)))
                }
                _ => {
                    return Err(malformed(
                        line_no,
                        format!("expected `<synset> <count> [ROOT]`, got {} fields", fields.len()),
                    ))
                }
            };

            let count: f64 = count
                .parse()
                .map_err(|_| malformed(line_no, format!("count {:?} is not a number", count)))?;
            if !count.is_finite() || count < 0.0 {
                return Err(malformed(line_no, format!("count {} is out of range", count)));
            }

            *result.counts.entry(name.to_string()).or_insert(0.0) += count;
            if is_root && !result.roots.iter().any(|r| r == name) {
                result.roots.push(name.to_string());
            }
        }

        Ok(result)
    }

    /// Count recorded for a synset name.
    pub fn count(&self, name: &str) -> Option<f64> {
        self.counts.get(name).copied()
    }

    /// Number of synsets with a count line.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no counts were read.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Probability mass of the hierarchy: sum of ROOT counts, or of the
    /// taxonomy's root synsets when no line is flagged ROOT.
    pub fn total(&self, taxonomy: &Taxonomy) -> f64 {
        if self.roots.is_empty() {
            taxonomy
                .roots()
                .into_iter()
                .filter_map(|id| self.count(taxonomy.name(id)))
                .sum()
        } else {
            self.roots.iter().filter_map(|r| self.count(r)).sum()
        }
    }

    /// Assign `-ln(count / total)` to every synset. Missing counts give IC 0.
    pub fn apply(&self, taxonomy: &mut Taxonomy) -> WsdResult<IcSummary> {
        let total = self.total(taxonomy);
        if total <= 0.0 {
            log::warn!("IC counts have no root mass; every synset keeps IC 0");
        }

        let mut summary = IcSummary::default();
        let mut assignments = Vec::with_capacity(taxonomy.synset_count());
        for synset in taxonomy.synsets() {
            let count = self.count(&synset.name).unwrap_or(0.0);
            if count > 0.0 && total > 0.0 {
                assignments.push((synset.id, -(count / total).ln()));
                summary.assigned += 1;
            } else {
                assignments.push((synset.id, 0.0));
                summary.unseen += 1;
            }
        }
        for (id, ic) in assignments {
            taxonomy.set_information_content(id, ic)?;
        }

        summary.skipped = self
            .counts
            .keys()
            .filter(|name| taxonomy.find(name).is_none())
            .count();
        if summary.skipped > 0 {
            log::warn!(
                "Skipped {} count lines for synsets not in the taxonomy",
                summary.skipped
            );
        }
        log::info!(
            "Applied IC: {} assigned, {} unseen (total mass {})",
            summary.assigned,
            summary.unseen,
            total
        );

        Ok(summary)
    }
}

fn malformed(line: usize, reason: String) -> WsdError {
    WsdError::MalformedRecord { line, reason }
}
