//! Readers for probe test files and human-judgment files.

use std::path::Path;

use crate::types::{
    JudgmentRecord, ProbeRecord, WsdError, WsdResult, FIELD_SEPARATOR, PROBE_SEPARATOR,
};

/// Parse one `probe<TAB>ctx1,ctx2,...` line. Returns `None` for blank lines.
pub fn parse_probe_line(line_no: usize, line: &str) -> WsdResult<Option<ProbeRecord>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let (probe, context) =
        line.split_once(PROBE_SEPARATOR)
            .ok_or_else(|| WsdError::MalformedRecord {
                line: line_no,
                reason: "expected `probe<TAB>context,words`".to_string(),
            })?;
    let probe = probe.trim();
    if probe.is_empty() {
        return Err(WsdError::MalformedRecord {
            line: line_no,
            reason: "empty probe word".to_string(),
        });
    }
    let context = context
        .split(FIELD_SEPARATOR)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Some(ProbeRecord {
        line: line_no,
        probe: probe.to_string(),
        context,
    }))
}

/// Parse one `word1,word2,score` line. Returns `None` for blank lines.
pub fn parse_judgment_line(line_no: usize, line: &str) -> WsdResult<Option<JudgmentRecord>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [word1, word2, score] = fields.as_slice() else {
        return Err(WsdError::MalformedRecord {
            line: line_no,
            reason: format!("expected `word1,word2,score`, got {} fields", fields.len()),
        });
    };
    if word1.is_empty() || word2.is_empty() {
        return Err(WsdError::MalformedRecord {
            line: line_no,
            reason: "empty word".to_string(),
        });
    }
    let human_score: f64 = score.parse().map_err(|_| WsdError::MalformedRecord {
        line: line_no,
        reason: format!("score {:?} is not a number", score),
    })?;
    if !human_score.is_finite() {
        return Err(WsdError::MalformedRecord {
            line: line_no,
            reason: format!("score {:?} is not finite", score),
        });
    }

    Ok(Some(JudgmentRecord {
        line: line_no,
        word1: word1.to_string(),
        word2: word2.to_string(),
        human_score,
    }))
}

/// Line-oriented record reader.
pub struct RecordReader;

impl RecordReader {
    /// Parse probe records from text.
    pub fn probes_from_str(text: &str) -> WsdResult<Vec<ProbeRecord>> {
        collect_lines(text, parse_probe_line)
    }

    /// Read probe records from a file.
    pub fn probes_from_file(path: &Path) -> WsdResult<Vec<ProbeRecord>> {
        let records = Self::probes_from_str(&std::fs::read_to_string(path)?)?;
        log::info!("Read {} probe records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Parse judgment records from text.
    pub fn judgments_from_str(text: &str) -> WsdResult<Vec<JudgmentRecord>> {
        collect_lines(text, parse_judgment_line)
    }

    /// Read judgment records from a file.
    pub fn judgments_from_file(path: &Path) -> WsdResult<Vec<JudgmentRecord>> {
        let records = Self::judgments_from_str(&std::fs::read_to_string(path)?)?;
        log::info!(
            "Read {} judgment records from {}",
            records.len(),
            path.display()
        );
        Ok(records)
    }
}

fn collect_lines<T>(
    text: &str,
    parse: impl Fn(usize, &str) -> WsdResult<Option<T>>,
) -> WsdResult<Vec<T>> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(record) = parse(idx + 1, line)? {
            records.push(record);
        }
    }
    Ok(records)
}
