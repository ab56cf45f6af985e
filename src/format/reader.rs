//! Reads JSON taxonomy files into an in-memory Taxonomy.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{Taxonomy, TaxonomyBuilder};
use crate::types::{SynsetId, WsdError, WsdResult, NOUN_POS};

/// On-disk taxonomy document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomyFile {
    pub synsets: Vec<SynsetEntry>,
}

/// One synset as stored in a taxonomy file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetEntry {
    /// Unique name, `lemma.pos.NN`.
    pub name: String,
    #[serde(default)]
    pub lemmas: Vec<String>,
    /// Names of direct hypernyms.
    #[serde(default)]
    pub hypernyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Inline IC; an IC counts file applied afterwards overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_content: Option<f64>,
}

/// Part of speech encoded in a `lemma.pos.NN` synset name, if the name has that shape.
pub fn synset_pos(name: &str) -> Option<char> {
    let mut parts = name.rsplitn(3, '.');
    let sense = parts.next()?;
    let pos = parts.next()?;
    parts.next()?;
    if sense.is_empty() || !sense.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut chars = pos.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Reader for JSON taxonomy files.
pub struct TaxonomyReader;

impl TaxonomyReader {
    /// Read a taxonomy file.
    pub fn read_from_file(path: &Path) -> WsdResult<Taxonomy> {
        let file = std::fs::File::open(path)?;
        let taxonomy = Self::read_from(&mut std::io::BufReader::new(file))?;
        log::info!(
            "Loaded {} synsets ({} lemmas) from {}",
            taxonomy.synset_count(),
            taxonomy.lemma_count(),
            path.display()
        );
        Ok(taxonomy)
    }

    /// Read from any reader.
    pub fn read_from(reader: &mut impl Read) -> WsdResult<Taxonomy> {
        let doc: TaxonomyFile = serde_json::from_reader(reader)?;
        Self::from_document(doc)
    }

    /// Build a taxonomy from a parsed document.
    ///
    /// Synsets of other parts of speech are dropped; only the noun hierarchy is kept.
    pub fn from_document(doc: TaxonomyFile) -> WsdResult<Taxonomy> {
        let mut builder = TaxonomyBuilder::new();
        let mut ids: HashMap<&str, SynsetId> = HashMap::with_capacity(doc.synsets.len());
        let mut kept: Vec<(&SynsetEntry, SynsetId)> = Vec::with_capacity(doc.synsets.len());
        let mut dropped = 0usize;

        for entry in &doc.synsets {
            if synset_pos(&entry.name).is_some_and(|pos| pos != NOUN_POS) {
                dropped += 1;
                continue;
            }
            let lemmas: Vec<&str> = entry.lemmas.iter().map(String::as_str).collect();
            let id = builder.add_synset(&entry.name, &lemmas);
            if ids.insert(entry.name.as_str(), id).is_some() {
                return Err(WsdError::DuplicateSynset(entry.name.clone()));
            }
            if let Some(ic) = entry.information_content {
                builder.set_information_content(id, ic);
            }
            if let Some(definition) = &entry.definition {
                builder.set_definition(id, definition);
            }
            kept.push((entry, id));
        }

        if dropped > 0 {
            log::warn!("Skipped {} non-noun synsets", dropped);
        }

        for (entry, id) in kept {
            for parent in &entry.hypernyms {
                let parent_id = ids
                    .get(parent.as_str())
                    .copied()
                    .ok_or_else(|| WsdError::UnknownSynset(parent.clone()))?;
                builder.add_hypernym(id, parent_id);
            }
        }

        builder.build()
    }
}
