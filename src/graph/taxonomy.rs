//! Core taxonomy structure: synsets, lemma index, and precomputed ancestor sets.

use std::collections::{HashMap, HashSet};

use crate::types::{normalize_lemma, Synset, SynsetId, WsdError, WsdResult};

use super::traversal::{bfs_ancestors, find_cycle};

/// The loaded noun hierarchy. Immutable once built; share it by reference.
#[derive(Debug)]
pub struct Taxonomy {
    /// All synsets, indexed by `SynsetId`.
    synsets: Vec<Synset>,
    /// Synset name -> id.
    by_name: HashMap<String, SynsetId>,
    /// Normalized lemma -> senses in declaration order.
    lemma_index: HashMap<String, Vec<SynsetId>>,
    /// Ancestor closure per synset, self first, nearer hypernyms before farther ones.
    ancestors: Vec<Vec<SynsetId>>,
    /// Same closure as a set, for membership tests.
    ancestor_sets: Vec<HashSet<SynsetId>>,
}

impl Taxonomy {
    /// Create from synsets whose ids equal their positions (used by the builder).
    pub fn from_parts(synsets: Vec<Synset>) -> WsdResult<Self> {
        let mut by_name = HashMap::with_capacity(synsets.len());
        for (idx, synset) in synsets.iter().enumerate() {
            if synset.id.index() != idx {
                return Err(WsdError::UnknownSynset(format!(
                    "{} has id {} but sits at position {}",
                    synset.name, synset.id, idx
                )));
            }
            if by_name.insert(synset.name.clone(), synset.id).is_some() {
                return Err(WsdError::DuplicateSynset(synset.name.clone()));
            }
            for &parent in &synset.hypernyms {
                if parent.index() >= synsets.len() {
                    return Err(WsdError::UnknownSynset(parent.to_string()));
                }
            }
        }

        if let Some(id) = find_cycle(&synsets) {
            return Err(WsdError::CyclicHierarchy(synsets[id.index()].name.clone()));
        }

        let mut lemma_index: HashMap<String, Vec<SynsetId>> = HashMap::new();
        for synset in &synsets {
            for lemma in &synset.lemmas {
                let senses = lemma_index.entry(normalize_lemma(lemma)).or_default();
                if !senses.contains(&synset.id) {
                    senses.push(synset.id);
                }
            }
        }

        let ancestors: Vec<Vec<SynsetId>> = synsets
            .iter()
            .map(|s| bfs_ancestors(&synsets, s.id))
            .collect();
        let ancestor_sets = ancestors
            .iter()
            .map(|list| list.iter().copied().collect())
            .collect();

        log::debug!(
            "Taxonomy built: {} synsets, {} lemmas",
            synsets.len(),
            lemma_index.len()
        );

        Ok(Self {
            synsets,
            by_name,
            lemma_index,
            ancestors,
            ancestor_sets,
        })
    }

    /// Number of synsets.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Number of distinct lemmas.
    pub fn lemma_count(&self) -> usize {
        self.lemma_index.len()
    }

    /// All synsets (immutable slice).
    pub fn synsets(&self) -> &[Synset] {
        &self.synsets
    }

    /// Get a synset by id.
    pub fn get(&self, id: SynsetId) -> Option<&Synset> {
        self.synsets.get(id.index())
    }

    /// Look up a synset id by its unique name.
    pub fn find(&self, name: &str) -> Option<SynsetId> {
        self.by_name.get(name).copied()
    }

    /// Name of a synset, or an empty string for a foreign id.
    pub fn name(&self, id: SynsetId) -> &str {
        self.get(id).map(|s| s.name.as_str()).unwrap_or("")
    }

    /// Candidate noun senses of a word, in declaration order. Empty if unknown.
    pub fn senses_of(&self, word: &str) -> &[SynsetId] {
        self.lemma_index
            .get(&normalize_lemma(word))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Information content of a synset. Unseen or foreign ids count as 0.0.
    pub fn information_content(&self, id: SynsetId) -> f64 {
        self.get(id).map(|s| s.information_content).unwrap_or(0.0)
    }

    /// Overwrite the information content of a synset (used while loading).
    pub fn set_information_content(&mut self, id: SynsetId, ic: f64) -> WsdResult<()> {
        let synset = self
            .synsets
            .get_mut(id.index())
            .ok_or_else(|| WsdError::UnknownSynset(id.to_string()))?;
        synset.information_content = ic.max(0.0);
        Ok(())
    }

    /// Transitive hypernyms of a synset, including itself.
    pub fn ancestors_of(&self, id: SynsetId) -> &[SynsetId] {
        self.ancestors
            .get(id.index())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `ancestor` is in the ancestor set of `node` (a node is its own ancestor).
    pub fn is_ancestor(&self, ancestor: SynsetId, node: SynsetId) -> bool {
        self.ancestor_sets
            .get(node.index())
            .is_some_and(|set| set.contains(&ancestor))
    }

    /// Ancestors shared by both synsets, in the traversal order of `a`.
    pub fn common_ancestors(&self, a: SynsetId, b: SynsetId) -> Vec<SynsetId> {
        self.ancestors_of(a)
            .iter()
            .copied()
            .filter(|&anc| self.is_ancestor(anc, b))
            .collect()
    }

    /// Synsets with no hypernyms.
    pub fn roots(&self) -> Vec<SynsetId> {
        self.synsets
            .iter()
            .filter(|s| s.is_root())
            .map(|s| s.id)
            .collect()
    }
}
