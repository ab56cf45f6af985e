//! Sense scorer: picks the probe sense best supported by a noun group.

use serde::Serialize;

use crate::graph::Taxonomy;
use crate::types::{SynsetId, WsdError, WsdResult};

use super::similarity::{MaxAncestor, SimilarityEngine};

/// Evidence contributed by one context word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextScore {
    /// The context word as given.
    pub context_word: String,
    /// Best similarity between any probe sense and any sense of the word.
    pub score: f64,
    /// Most informative common ancestor behind `score`.
    pub ancestor: Option<SynsetId>,
    /// False when the word has no noun senses (it then contributes nothing).
    pub known: bool,
}

/// Outcome of disambiguating one probe.
#[derive(Debug, Clone, Serialize)]
pub struct Disambiguation {
    /// The probe word as given.
    pub probe: String,
    /// Highest-supported sense; ties go to the earlier candidate.
    pub preferred: SynsetId,
    /// One entry per context word, in input order.
    pub trace: Vec<ContextScore>,
    /// Accumulated support per candidate sense, in candidate order.
    pub sense_scores: Vec<(SynsetId, f64)>,
}

impl Disambiguation {
    /// Accumulated support for one candidate sense.
    pub fn score_of(&self, sense: SynsetId) -> Option<f64> {
        self.sense_scores
            .iter()
            .find(|(id, _)| *id == sense)
            .map(|(_, score)| *score)
    }
}

/// Disambiguates probe words against the taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct SenseScorer<'a> {
    engine: SimilarityEngine<'a>,
}

impl<'a> SenseScorer<'a> {
    /// Create a scorer reading from `taxonomy`.
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self {
            engine: SimilarityEngine::new(taxonomy),
        }
    }

    /// The pairwise engine used for each comparison.
    pub fn engine(&self) -> &SimilarityEngine<'a> {
        &self.engine
    }

    /// Select the preferred sense of `probe` given `context`.
    ///
    /// Fails with `NoSenseFound` when the probe is unknown. Unknown context
    /// words are kept in the trace with score 0.0 and credit no sense.
    pub fn disambiguate<S: AsRef<str>>(
        &self,
        probe: &str,
        context: &[S],
    ) -> WsdResult<Disambiguation> {
        let taxonomy = self.engine.taxonomy();
        let probe_senses = taxonomy.senses_of(probe);
        if probe_senses.is_empty() {
            return Err(WsdError::NoSenseFound {
                word: probe.to_string(),
            });
        }

        // Every candidate starts at 0.0 so the argmax is always defined.
        let mut table: Vec<(SynsetId, f64)> = probe_senses.iter().map(|&s| (s, 0.0)).collect();
        let mut trace = Vec::with_capacity(context.len());

        for word in context {
            let word = word.as_ref();
            let context_senses = taxonomy.senses_of(word);
            if context_senses.is_empty() {
                log::warn!(
                    "Context word {:?} has no noun senses; it contributes nothing to {:?}",
                    word,
                    probe
                );
                trace.push(ContextScore {
                    context_word: word.to_string(),
                    score: 0.0,
                    ancestor: None,
                    known: false,
                });
                continue;
            }

            let mut best = MaxAncestor::new();
            for &p in probe_senses {
                for &c in context_senses {
                    best.merge(self.engine.similarity(p, c));
                }
            }
            let best = best.finish();

            if let Some(milcs) = best.ancestor {
                for (sense, support) in table.iter_mut() {
                    if taxonomy.is_ancestor(milcs, *sense) {
                        *support += best.score;
                    }
                }
            }

            log::debug!(
                "({}, {}) -> {} via {}",
                probe,
                word,
                best.score,
                best.ancestor.map(|id| taxonomy.name(id)).unwrap_or("-")
            );

            trace.push(ContextScore {
                context_word: word.to_string(),
                score: best.score,
                ancestor: best.ancestor,
                known: true,
            });
        }

        let preferred = argmax_first(&table).ok_or_else(|| WsdError::NoSenseSelectable {
            word: probe.to_string(),
        })?;

        Ok(Disambiguation {
            probe: probe.to_string(),
            preferred,
            trace,
            sense_scores: table,
        })
    }
}

/// First entry with the maximal score.
fn argmax_first(table: &[(SynsetId, f64)]) -> Option<SynsetId> {
    let mut best: Option<(SynsetId, f64)> = None;
    for &(id, score) in table {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((id, score)),
        }
    }
    best.map(|(id, _)| id)
}
