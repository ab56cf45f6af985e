//! Full run: disambiguation pass, evaluation pass, correlation.

use serde::Serialize;

use crate::graph::Taxonomy;
use crate::types::{JudgmentRecord, ProbeRecord, WsdError, WsdResult};

use super::correlation::spearman;
use super::disambiguate::{Disambiguation, SenseScorer};
use super::similarity::SimilarityEngine;

/// Knobs for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Score judgment pairs with an unknown word as 0.0 instead of aborting.
    pub skip_unknown_pairs: bool,
}

/// Computed similarity for one judged word pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScore {
    pub word1: String,
    pub word2: String,
    /// Resnik similarity computed by the engine.
    pub score: f64,
    /// Human rating from the judgment file.
    pub human_score: f64,
}

/// Result of the evaluation pass.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub pairs: Vec<PairScore>,
    /// Spearman's rho between computed and human scores; NaN when undefined.
    pub correlation: f64,
}

/// Everything a run produces.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub disambiguations: Vec<Disambiguation>,
    /// Absent when the run had no judgment records.
    pub evaluation: Option<EvaluationReport>,
}

/// Disambiguate every probe record, in order.
pub fn disambiguate_all(
    taxonomy: &Taxonomy,
    probes: &[ProbeRecord],
) -> WsdResult<Vec<Disambiguation>> {
    let scorer = SenseScorer::new(taxonomy);
    probes
        .iter()
        .map(|record| {
            scorer
                .disambiguate(&record.probe, record.context.as_slice())
                .map_err(|e| e.at_line(record.line))
        })
        .collect()
}

/// Score every judgment pair and correlate against the human ratings.
pub fn evaluate_all(
    taxonomy: &Taxonomy,
    judgments: &[JudgmentRecord],
    options: RunOptions,
) -> WsdResult<EvaluationReport> {
    let engine = SimilarityEngine::new(taxonomy);
    let mut pairs = Vec::with_capacity(judgments.len());

    for record in judgments {
        let score = match engine.evaluate_pair(&record.word1, &record.word2) {
            Ok(score) => score,
            Err(WsdError::NoSenseFound { word }) if options.skip_unknown_pairs => {
                log::warn!(
                    "Line {}: {:?} has no noun senses; scoring {},{} as 0",
                    record.line,
                    word,
                    record.word1,
                    record.word2
                );
                0.0
            }
            Err(e) => return Err(e.at_line(record.line)),
        };
        pairs.push(PairScore {
            word1: record.word1.clone(),
            word2: record.word2.clone(),
            score,
            human_score: record.human_score,
        });
    }

    let computed: Vec<f64> = pairs.iter().map(|p| p.score).collect();
    let human: Vec<f64> = pairs.iter().map(|p| p.human_score).collect();
    let correlation = if pairs.len() < 2 {
        log::warn!("Only {} judgment pair(s); correlation undefined", pairs.len());
        f64::NAN
    } else {
        spearman(&computed, &human)?
    };
    log::info!(
        "Evaluated {} pairs, Spearman correlation {}",
        pairs.len(),
        correlation
    );

    Ok(EvaluationReport { pairs, correlation })
}

/// Run both passes over already-parsed records.
pub fn run(
    taxonomy: &Taxonomy,
    probes: &[ProbeRecord],
    judgments: &[JudgmentRecord],
    options: RunOptions,
) -> WsdResult<RunReport> {
    let disambiguations = disambiguate_all(taxonomy, probes)?;
    log::info!("Disambiguated {} probes", disambiguations.len());

    let evaluation = if judgments.is_empty() {
        None
    } else {
        Some(evaluate_all(taxonomy, judgments, options)?)
    };

    Ok(RunReport {
        disambiguations,
        evaluation,
    })
}
