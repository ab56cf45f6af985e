//! Fluent API for building Taxonomy instances.

use crate::types::{Synset, SynsetId, WsdResult};

use super::Taxonomy;

/// Fluent builder for constructing a Taxonomy.
pub struct TaxonomyBuilder {
    synsets: Vec<Synset>,
}

impl TaxonomyBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            synsets: Vec::new(),
        }
    }

    /// Add a synset with the given lemmas, returns its id.
    pub fn add_synset(&mut self, name: &str, lemmas: &[&str]) -> SynsetId {
        let id = SynsetId(self.synsets.len() as u32);
        self.synsets.push(Synset {
            id,
            name: name.to_string(),
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
            definition: None,
            hypernyms: Vec::new(),
            information_content: 0.0,
        });
        id
    }

    /// Add a synset together with its information content.
    pub fn add_synset_with_ic(&mut self, name: &str, lemmas: &[&str], ic: f64) -> SynsetId {
        let id = self.add_synset(name, lemmas);
        self.set_information_content(id, ic);
        id
    }

    /// Declare `parent` as a direct hypernym of `child`.
    pub fn add_hypernym(&mut self, child: SynsetId, parent: SynsetId) -> &mut Self {
        if let Some(node) = self.synsets.get_mut(child.index()) {
            if !node.hypernyms.contains(&parent) {
                node.hypernyms.push(parent);
            }
        }
        self
    }

    /// Set information content for a synset (negative values clamp to 0.0).
    pub fn set_information_content(&mut self, id: SynsetId, ic: f64) -> &mut Self {
        if let Some(node) = self.synsets.get_mut(id.index()) {
            node.information_content = ic.max(0.0);
        }
        self
    }

    /// Attach a gloss to a synset.
    pub fn set_definition(&mut self, id: SynsetId, definition: &str) -> &mut Self {
        if let Some(node) = self.synsets.get_mut(id.index()) {
            node.definition = Some(definition.to_string());
        }
        self
    }

    /// Number of synsets added so far.
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    /// Whether no synsets were added.
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Build the final Taxonomy. Fails on duplicate names or hypernym cycles.
    pub fn build(self) -> WsdResult<Taxonomy> {
        Taxonomy::from_parts(self.synsets)
    }
}

impl Default for TaxonomyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
