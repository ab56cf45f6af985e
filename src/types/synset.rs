//! Synset identifiers and the taxonomy node struct.

use serde::Serialize;

/// Dense index of a synset inside its taxonomy.
///
/// Ids are only meaningful for the taxonomy that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SynsetId(pub u32);

impl SynsetId {
    /// Position of this synset in the taxonomy's node table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SynsetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One sense node of the noun hierarchy.
#[derive(Debug, Clone, Serialize)]
pub struct Synset {
    /// Id assigned by the taxonomy.
    pub id: SynsetId,
    /// Unique name, e.g. `bank.n.01`.
    pub name: String,
    /// Surface forms that map to this sense.
    pub lemmas: Vec<String>,
    /// Gloss, if the taxonomy file carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Direct hypernyms.
    pub hypernyms: Vec<SynsetId>,
    /// Information content; 0.0 when the corpus never saw the concept.
    pub information_content: f64,
}

impl Synset {
    /// Whether this synset has no hypernyms.
    pub fn is_root(&self) -> bool {
        self.hypernyms.is_empty()
    }
}

/// Result of comparing two synsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// IC of the most informative common ancestor, or 0.0.
    pub score: f64,
    /// Most informative common ancestor, when one has IC above zero.
    pub ancestor: Option<SynsetId>,
    /// Whether the two synsets share any ancestor at all.
    pub shares_ancestor: bool,
}

impl SimilarityResult {
    /// The result for two synsets with no common ancestor.
    pub fn disconnected() -> Self {
        Self {
            score: 0.0,
            ancestor: None,
            shares_ancestor: false,
        }
    }
}

/// Normalize a surface word for lemma lookup.
///
/// Lookup is case-insensitive and treats spaces like underscores.
pub fn normalize_lemma(word: &str) -> String {
    word.trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}
