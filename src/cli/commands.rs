//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::config::{OutputFormat, RunConfig};
use crate::engine::{self, Disambiguation, RunReport, SenseScorer, SimilarityEngine};
use crate::format::{load_taxonomy, RecordReader, ReportWriter, TaxonomyWriter};
use crate::graph::Taxonomy;
use crate::types::{SynsetId, WsdError, WsdResult};

/// Run the disambiguation and evaluation passes described by `config`.
pub fn cmd_run(config: &RunConfig) -> WsdResult<()> {
    config.validate()?;
    let taxonomy = load_taxonomy(
        config.taxonomy_path()?,
        config.inputs.information_content.as_deref(),
    )?;

    let probes = match &config.inputs.probes {
        Some(path) => RecordReader::probes_from_file(path)?,
        None => Vec::new(),
    };
    let judgments = match &config.inputs.judgments {
        Some(path) => RecordReader::judgments_from_file(path)?,
        None => Vec::new(),
    };

    let report = engine::run(&taxonomy, &probes, &judgments, config.run_options())?;

    let json = config.output_format()? == OutputFormat::Json;
    match &config.output.path {
        Some(path) => {
            if json {
                let file = std::fs::File::create(path)?;
                let mut writer = std::io::BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, &report_json(&taxonomy, &report))?;
                writeln!(writer)?;
                writer.flush()?;
            } else {
                ReportWriter::new(&taxonomy).write_to_file(&report, path)?;
            }
            eprintln!("Wrote report to {}", path.display());
        }
        None => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report_json(&taxonomy, &report))
                        .unwrap_or_default()
                );
            } else {
                let stdout = std::io::stdout();
                ReportWriter::new(&taxonomy).write_to(&report, &mut stdout.lock())?;
            }
        }
    }
    Ok(())
}

/// Disambiguate a single probe against a context list.
pub fn cmd_disambiguate(
    taxonomy_path: &Path,
    ic_path: Option<&Path>,
    probe: &str,
    context: &[String],
    json: bool,
) -> WsdResult<()> {
    let taxonomy = load_taxonomy(taxonomy_path, ic_path)?;
    let result = SenseScorer::new(&taxonomy).disambiguate(probe, context)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&disambiguation_json(&taxonomy, &result))
                .unwrap_or_default()
        );
    } else {
        println!("Probe: {}", result.probe);
        for entry in &result.trace {
            let via = entry
                .ancestor
                .map(|id| taxonomy.name(id).to_string())
                .unwrap_or_else(|| "-".to_string());
            let note = if entry.known { "" } else { " (unknown)" };
            println!(
                "  {:<20} {:>8.4}  via {}{}",
                entry.context_word, entry.score, via, note
            );
        }
        println!("Sense scores:");
        for &(sense, score) in &result.sense_scores {
            let marker = if sense == result.preferred { "*" } else { " " };
            println!("  {} {:<24} {:.4}", marker, taxonomy.name(sense), score);
        }
        println!("Preferred: {}", taxonomy.name(result.preferred));
    }
    Ok(())
}

/// Resnik similarity between two words.
pub fn cmd_similarity(
    taxonomy_path: &Path,
    ic_path: Option<&Path>,
    word1: &str,
    word2: &str,
    json: bool,
) -> WsdResult<()> {
    let taxonomy = load_taxonomy(taxonomy_path, ic_path)?;
    let result = SimilarityEngine::new(&taxonomy).word_similarity(word1, word2)?;
    let ancestor = result.ancestor.map(|id| taxonomy.name(id).to_string());

    if json {
        let info = serde_json::json!({
            "word1": word1,
            "word2": word2,
            "score": result.score,
            "ancestor": ancestor,
            "shares_ancestor": result.shares_ancestor,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{},{}:{}", word1, word2, result.score);
        match ancestor {
            Some(name) => println!("  Most informative common ancestor: {}", name),
            None if result.shares_ancestor => {
                println!("  Common ancestors all have zero information content")
            }
            None => println!("  No common ancestor"),
        }
    }
    Ok(())
}

/// List the noun senses of a word with their IC and hypernym chain.
pub fn cmd_senses(
    taxonomy_path: &Path,
    ic_path: Option<&Path>,
    word: &str,
    json: bool,
) -> WsdResult<()> {
    let taxonomy = load_taxonomy(taxonomy_path, ic_path)?;
    let senses = taxonomy.senses_of(word);
    if senses.is_empty() {
        return Err(WsdError::NoSenseFound {
            word: word.to_string(),
        });
    }

    if json {
        let list: Vec<serde_json::Value> = senses
            .iter()
            .map(|&id| sense_json(&taxonomy, id))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&list).unwrap_or_default()
        );
    } else {
        for (i, &id) in senses.iter().enumerate() {
            let synset = taxonomy
                .get(id)
                .ok_or_else(|| WsdError::UnknownSynset(id.to_string()))?;
            println!(
                "{}. {} (IC {:.4})",
                i + 1,
                synset.name,
                synset.information_content
            );
            if let Some(definition) = &synset.definition {
                println!("   {}", definition);
            }
            let chain: Vec<&str> = taxonomy
                .ancestors_of(id)
                .iter()
                .skip(1)
                .map(|&a| taxonomy.name(a))
                .collect();
            if !chain.is_empty() {
                println!("   ancestors: {}", chain.join(" > "));
            }
        }
    }
    Ok(())
}

/// Summary statistics about a taxonomy.
pub fn cmd_info(taxonomy_path: &Path, ic_path: Option<&Path>, json: bool) -> WsdResult<()> {
    let taxonomy = load_taxonomy(taxonomy_path, ic_path)?;
    let roots = taxonomy.roots();
    let with_ic = taxonomy
        .synsets()
        .iter()
        .filter(|s| s.information_content > 0.0)
        .count();
    let max_ic = taxonomy
        .synsets()
        .iter()
        .map(|s| s.information_content)
        .fold(0.0_f64, f64::max);
    let max_depth = taxonomy
        .synsets()
        .iter()
        .map(|s| taxonomy.ancestors_of(s.id).len())
        .max()
        .unwrap_or(0);

    if json {
        let info = serde_json::json!({
            "file": taxonomy_path.display().to_string(),
            "synsets": taxonomy.synset_count(),
            "lemmas": taxonomy.lemma_count(),
            "roots": roots.iter().map(|&r| taxonomy.name(r)).collect::<Vec<_>>(),
            "synsets_with_ic": with_ic,
            "max_ic": max_ic,
            "max_ancestor_set": max_depth,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", taxonomy_path.display());
        println!("Synsets: {}", taxonomy.synset_count());
        println!("Lemmas: {}", taxonomy.lemma_count());
        println!(
            "Roots: {}",
            roots
                .iter()
                .map(|&r| taxonomy.name(r))
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Synsets with IC: {}", with_ic);
        println!("Max IC: {:.4}", max_ic);
        println!("Largest ancestor set: {}", max_depth);
    }
    Ok(())
}

/// Export the loaded taxonomy, with IC applied, as JSON.
pub fn cmd_export(
    taxonomy_path: &Path,
    ic_path: Option<&Path>,
    output: Option<&Path>,
    pretty: bool,
) -> WsdResult<()> {
    let taxonomy = load_taxonomy(taxonomy_path, ic_path)?;
    let writer = TaxonomyWriter::new(pretty);
    match output {
        Some(path) => {
            writer.write_to_file(&taxonomy, path)?;
            eprintln!("Exported {} synsets to {}", taxonomy.synset_count(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            writer.write_to(&taxonomy, &mut stdout.lock())?;
        }
    }
    Ok(())
}

fn sense_json(taxonomy: &Taxonomy, id: SynsetId) -> serde_json::Value {
    serde_json::json!({
        "name": taxonomy.name(id),
        "information_content": taxonomy.information_content(id),
        "definition": taxonomy.get(id).and_then(|s| s.definition.clone()),
        "ancestors": taxonomy
            .ancestors_of(id)
            .iter()
            .map(|&a| taxonomy.name(a))
            .collect::<Vec<_>>(),
    })
}

fn disambiguation_json(taxonomy: &Taxonomy, d: &Disambiguation) -> serde_json::Value {
    serde_json::json!({
        "probe": d.probe,
        "preferred": taxonomy.name(d.preferred),
        "trace": d.trace.iter().map(|e| serde_json::json!({
            "context_word": e.context_word,
            "score": e.score,
            "ancestor": e.ancestor.map(|id| taxonomy.name(id)),
            "known": e.known,
        })).collect::<Vec<_>>(),
        "sense_scores": d.sense_scores.iter().map(|&(id, score)| serde_json::json!({
            "sense": taxonomy.name(id),
            "score": score,
        })).collect::<Vec<_>>(),
    })
}

/// JSON rendering of a run report with sense names resolved.
pub fn report_json(taxonomy: &Taxonomy, report: &RunReport) -> serde_json::Value {
    let evaluation = report.evaluation.as_ref().map(|e| {
        // NaN is not valid JSON; an undefined correlation becomes null.
        let correlation = Some(e.correlation).filter(|c| !c.is_nan());
        serde_json::json!({
            "pairs": e.pairs,
            "correlation": correlation,
        })
    });
    serde_json::json!({
        "disambiguations": report
            .disambiguations
            .iter()
            .map(|d| disambiguation_json(taxonomy, d))
            .collect::<Vec<_>>(),
        "evaluation": evaluation,
    })
}
