//! Run configuration loading from a TOML file and CLI overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::RunOptions;
use crate::types::{WsdError, WsdResult};

/// Input file locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// JSON taxonomy file.
    pub taxonomy: Option<PathBuf>,
    /// IC counts file; when absent, inline IC from the taxonomy file is used.
    pub information_content: Option<PathBuf>,
    /// Probe test file (`probe<TAB>ctx,ctx`).
    pub probes: Option<PathBuf>,
    /// Human judgment file (`w1,w2,score`).
    pub judgments: Option<PathBuf>,
}

/// Where and how to write the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report file; stdout when absent.
    pub path: Option<PathBuf>,
    /// "text" or "json".
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: default_format(),
        }
    }
}

/// Evaluation pass behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Score pairs with an unknown word as 0 instead of aborting.
    pub skip_unknown: bool,
}

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub inputs: InputConfig,
    pub output: OutputConfig,
    pub evaluation: EvaluationConfig,
    /// Log level for the binary's logger.
    pub log_level: Option<String>,
}

fn default_format() -> String {
    "text".to_string()
}

/// Report and CLI output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a `--format` / `output.format` value.
    pub fn parse(value: &str) -> WsdResult<Self> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(WsdError::Config(format!(
                "unknown output format {:?} (expected text or json)",
                other
            ))),
        }
    }
}

impl RunConfig {
    /// Engine options derived from this config.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            skip_unknown_pairs: self.evaluation.skip_unknown,
        }
    }

    /// Taxonomy path, which every command needs.
    pub fn taxonomy_path(&self) -> WsdResult<&Path> {
        self.inputs
            .taxonomy
            .as_deref()
            .ok_or_else(|| WsdError::Config("no taxonomy file given".to_string()))
    }

    /// Overlay values given on the command line; `Some` wins over the file.
    pub fn merge(&mut self, overrides: RunOverrides) {
        let RunOverrides {
            taxonomy,
            information_content,
            probes,
            judgments,
            output,
            format,
            skip_unknown,
        } = overrides;

        if taxonomy.is_some() {
            self.inputs.taxonomy = taxonomy;
        }
        if information_content.is_some() {
            self.inputs.information_content = information_content;
        }
        if probes.is_some() {
            self.inputs.probes = probes;
        }
        if judgments.is_some() {
            self.inputs.judgments = judgments;
        }
        if output.is_some() {
            self.output.path = output;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        if skip_unknown {
            self.evaluation.skip_unknown = true;
        }
    }

    /// Check that the config can drive a full run.
    pub fn validate(&self) -> WsdResult<()> {
        self.taxonomy_path()?;
        if self.inputs.probes.is_none() && self.inputs.judgments.is_none() {
            return Err(WsdError::Config(
                "nothing to do: give a probe file, a judgment file, or both".to_string(),
            ));
        }
        self.output_format().map(|_| ())
    }

    /// The configured output format.
    pub fn output_format(&self) -> WsdResult<OutputFormat> {
        OutputFormat::parse(&self.output.format)
    }
}

/// Command-line values that override the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub taxonomy: Option<PathBuf>,
    pub information_content: Option<PathBuf>,
    pub probes: Option<PathBuf>,
    pub judgments: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub skip_unknown: bool,
}

/// Parse configuration from TOML text.
pub fn parse_config(text: &str) -> WsdResult<RunConfig> {
    toml::from_str(text).map_err(|e| WsdError::Config(format!("Failed to parse config: {e}")))
}

/// Load configuration from a TOML file.
///
/// Relative input/output paths are resolved against the config file's directory.
pub fn load_config(path: &Path) -> WsdResult<RunConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        WsdError::Io(std::io::Error::other(format!(
            "Failed to read config file {}: {e}",
            path.display()
        )))
    })?;
    let mut config = parse_config(&content)?;
    if let Some(base) = path.parent() {
        config.resolve_relative_to(base);
    }
    Ok(config)
}

impl RunConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        let fields = [
            &mut self.inputs.taxonomy,
            &mut self.inputs.information_content,
            &mut self.inputs.probes,
            &mut self.inputs.judgments,
            &mut self.output.path,
        ];
        for field in fields {
            if let Some(p) = field.as_mut() {
                if p.is_relative() {
                    *p = base.join(&*p);
                }
            }
        }
    }
}
