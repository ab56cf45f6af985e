//! Text report writer for run results.

use std::io::Write;
use std::path::Path;

use crate::engine::{Disambiguation, EvaluationReport, RunReport};
use crate::graph::Taxonomy;
use crate::types::WsdResult;

/// Format a similarity score for the report.
///
/// A score with no supporting ancestor is written as a bare `0`; every other
/// value goes through [`format_float`].
pub fn format_score(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format_float(value)
    }
}

/// Format a float so integral values keep a trailing `.0` and non-finite
/// values print as `nan` / `inf`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Renders run reports; needs the taxonomy to name preferred senses.
pub struct ReportWriter<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> ReportWriter<'a> {
    /// Create a writer naming senses from `taxonomy`.
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Write a report to a file.
    pub fn write_to_file(&self, report: &RunReport, path: &Path) -> WsdResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(report, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a report to any writer.
    pub fn write_to(&self, report: &RunReport, writer: &mut impl Write) -> WsdResult<()> {
        for d in &report.disambiguations {
            self.write_disambiguation(d, writer)?;
        }
        if let Some(evaluation) = &report.evaluation {
            self.write_evaluation(evaluation, writer)?;
        }
        Ok(())
    }

    /// Trace line `(probe, ctx, score) ...` followed by the preferred sense name.
    pub fn write_disambiguation(
        &self,
        d: &Disambiguation,
        writer: &mut impl Write,
    ) -> WsdResult<()> {
        for entry in &d.trace {
            write!(
                writer,
                "({}, {}, {}) ",
                d.probe,
                entry.context_word,
                format_score(entry.score)
            )?;
        }
        writeln!(writer)?;
        writeln!(writer, "{}", self.taxonomy.name(d.preferred))?;
        Ok(())
    }

    /// One `word1,word2:score` line per pair, then `Correlation:<rho>`.
    pub fn write_evaluation(
        &self,
        evaluation: &EvaluationReport,
        writer: &mut impl Write,
    ) -> WsdResult<()> {
        for pair in &evaluation.pairs {
            writeln!(
                writer,
                "{},{}:{}",
                pair.word1,
                pair.word2,
                format_score(pair.score)
            )?;
        }
        writeln!(
            writer,
            "Correlation:{}",
            format_float(evaluation.correlation)
        )?;
        Ok(())
    }

    /// Render a report to a string.
    pub fn render(&self, report: &RunReport) -> WsdResult<String> {
        let mut buf = Vec::new();
        self.write_to(report, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
