//! Writes an in-memory Taxonomy back out as a JSON taxonomy file.

use std::io::Write;
use std::path::Path;

use crate::graph::Taxonomy;
use crate::types::WsdResult;

use super::reader::{SynsetEntry, TaxonomyFile};

/// Writer for JSON taxonomy files. IC values are written inline.
pub struct TaxonomyWriter {
    pretty: bool,
}

impl TaxonomyWriter {
    /// Create a new writer.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Convert a taxonomy to its on-disk document.
    pub fn to_document(taxonomy: &Taxonomy) -> TaxonomyFile {
        let synsets = taxonomy
            .synsets()
            .iter()
            .map(|s| SynsetEntry {
                name: s.name.clone(),
                lemmas: s.lemmas.clone(),
                hypernyms: s
                    .hypernyms
                    .iter()
                    .map(|&h| taxonomy.name(h).to_string())
                    .collect(),
                definition: s.definition.clone(),
                information_content: Some(s.information_content),
            })
            .collect();
        TaxonomyFile { synsets }
    }

    /// Write a taxonomy to a file.
    pub fn write_to_file(&self, taxonomy: &Taxonomy, path: &Path) -> WsdResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(taxonomy, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a taxonomy to any writer.
    pub fn write_to(&self, taxonomy: &Taxonomy, writer: &mut impl Write) -> WsdResult<()> {
        let doc = Self::to_document(taxonomy);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &doc)?;
        } else {
            serde_json::to_writer(&mut *writer, &doc)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
