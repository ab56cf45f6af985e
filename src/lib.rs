//! resnik-wsd: noun sense disambiguation over an IC-weighted taxonomy.
//!
//! Scores sense pairs with Resnik similarity (the information content of
//! their most informative common ancestor), picks the sense of a probe noun
//! best supported by a group of context nouns, and correlates word-pair
//! scores with human similarity judgments.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, RunConfig, RunOverrides};
pub use engine::{
    run, spearman, ContextScore, Disambiguation, EvaluationReport, PairScore, RunOptions,
    RunReport, SenseScorer, SimilarityEngine,
};
pub use format::{load_taxonomy, IcCounts, RecordReader, ReportWriter, TaxonomyReader, TaxonomyWriter};
pub use graph::{Taxonomy, TaxonomyBuilder};
pub use types::{
    JudgmentRecord, ProbeRecord, SimilarityResult, Synset, SynsetId, WsdError, WsdResult,
};
