//! High-level operations: similarity, disambiguation, and evaluation.

pub mod correlation;
pub mod disambiguate;
pub mod run;
pub mod similarity;

pub use correlation::{rank, spearman};
pub use disambiguate::{ContextScore, Disambiguation, SenseScorer};
pub use run::{
    disambiguate_all, evaluate_all, run, EvaluationReport, PairScore, RunOptions, RunReport,
};
pub use similarity::SimilarityEngine;
