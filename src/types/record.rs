//! Input records consumed by a run.

use serde::Serialize;

/// One disambiguation test: a probe noun and its noun-group context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeRecord {
    /// 1-based line number in the source file.
    pub line: usize,
    /// The word to disambiguate.
    pub probe: String,
    /// Context nouns, in file order.
    pub context: Vec<String>,
}

/// One human similarity judgment for a word pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgmentRecord {
    /// 1-based line number in the source file.
    pub line: usize,
    pub word1: String,
    pub word2: String,
    /// Human rating; scale is whatever the judgment file uses.
    pub human_score: f64,
}
