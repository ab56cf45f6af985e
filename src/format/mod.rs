//! File I/O: taxonomy and IC loading, input records, reports.

pub mod ic;
pub mod reader;
pub mod records;
pub mod report;
pub mod writer;

use std::path::Path;

use crate::graph::Taxonomy;
use crate::types::WsdResult;

pub use ic::{IcCounts, IcSummary};
pub use reader::{synset_pos, SynsetEntry, TaxonomyFile, TaxonomyReader};
pub use records::{parse_judgment_line, parse_probe_line, RecordReader};
pub use report::{format_float, format_score, ReportWriter};
pub use writer::TaxonomyWriter;

/// Load a taxonomy and, if given, apply an IC counts file on top of it.
pub fn load_taxonomy(taxonomy_path: &Path, ic_path: Option<&Path>) -> WsdResult<Taxonomy> {
    let mut taxonomy = TaxonomyReader::read_from_file(taxonomy_path)?;
    if let Some(ic_path) = ic_path {
        let counts = IcCounts::read_from_file(ic_path)?;
        counts.apply(&mut taxonomy)?;
    }
    Ok(taxonomy)
}
