//! Resnik similarity: IC of the most informative common ancestor.

use crate::graph::Taxonomy;
use crate::types::{SimilarityResult, SynsetId, WsdError, WsdResult};

/// Running maximum over candidate ancestors.
///
/// Starts at 0.0 with no ancestor; a candidate replaces the retained one only
/// when its IC is strictly greater, so the first ancestor reaching the maximum
/// wins.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MaxAncestor {
    best: SimilarityResult,
}

impl MaxAncestor {
    pub(crate) fn new() -> Self {
        Self {
            best: SimilarityResult::disconnected(),
        }
    }

    /// Offer one common ancestor.
    pub(crate) fn offer(&mut self, ancestor: SynsetId, ic: f64) {
        self.best.shares_ancestor = true;
        if ic > self.best.score {
            self.best.score = ic;
            self.best.ancestor = Some(ancestor);
        }
    }

    /// Fold in the result of one pairwise comparison.
    pub(crate) fn merge(&mut self, result: SimilarityResult) {
        self.best.shares_ancestor |= result.shares_ancestor;
        if let Some(ancestor) = result.ancestor {
            if result.score > self.best.score {
                self.best.score = result.score;
                self.best.ancestor = Some(ancestor);
            }
        }
    }

    pub(crate) fn finish(self) -> SimilarityResult {
        self.best
    }
}

/// Pairwise similarity engine over one loaded taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityEngine<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> SimilarityEngine<'a> {
    /// Create an engine reading from `taxonomy`.
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// The taxonomy this engine reads from.
    pub fn taxonomy(&self) -> &'a Taxonomy {
        self.taxonomy
    }

    /// Resnik similarity of two synsets.
    ///
    /// Every common ancestor is scanned; IC is not assumed to grow with depth.
    pub fn similarity(&self, a: SynsetId, b: SynsetId) -> SimilarityResult {
        let mut best = MaxAncestor::new();
        for &ancestor in self.taxonomy.ancestors_of(a) {
            if self.taxonomy.is_ancestor(ancestor, b) {
                best.offer(ancestor, self.taxonomy.information_content(ancestor));
            }
        }
        best.finish()
    }

    /// Best similarity over the full cross product of two sense lists.
    ///
    /// Pairs are visited left-major; the first pair to reach the maximum keeps
    /// its ancestor.
    pub fn best_over_senses(&self, left: &[SynsetId], right: &[SynsetId]) -> SimilarityResult {
        let mut best = MaxAncestor::new();
        for &a in left {
            for &b in right {
                best.merge(self.similarity(a, b));
            }
        }
        best.finish()
    }

    /// Word-to-word similarity: maximum over all sense combinations.
    pub fn word_similarity(&self, word1: &str, word2: &str) -> WsdResult<SimilarityResult> {
        let senses1 = self.senses_or_err(word1)?;
        let senses2 = self.senses_or_err(word2)?;
        let result = self.best_over_senses(senses1, senses2);
        log::debug!(
            "{} ~ {}: {} via {}",
            word1,
            word2,
            result.score,
            result
                .ancestor
                .map(|id| self.taxonomy.name(id))
                .unwrap_or("-")
        );
        Ok(result)
    }

    /// Plain word-pair score for correlation studies.
    pub fn evaluate_pair(&self, word1: &str, word2: &str) -> WsdResult<f64> {
        Ok(self.word_similarity(word1, word2)?.score)
    }

    fn senses_or_err(&self, word: &str) -> WsdResult<&'a [SynsetId]> {
        let senses = self.taxonomy.senses_of(word);
        if senses.is_empty() {
            return Err(WsdError::NoSenseFound {
                word: word.to_string(),
            });
        }
        Ok(senses)
    }
}
