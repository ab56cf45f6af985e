//! Error types for the resnik-wsd library.

use thiserror::Error;

/// All errors that can occur in the resnik-wsd library.
#[derive(Error, Debug)]
pub enum WsdError {
    /// A queried word has no noun senses in the taxonomy.
    #[error("No noun senses found for word {word:?}")]
    NoSenseFound { word: String },

    /// The sense score table was empty after accumulation.
    #[error("No sense could be selected for probe {word:?}")]
    NoSenseSelectable { word: String },

    /// An input line could not be split into its expected fields.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A synset name does not exist in the taxonomy.
    #[error("Unknown synset: {0}")]
    UnknownSynset(String),

    /// The same synset name was declared twice.
    #[error("Duplicate synset: {0}")]
    DuplicateSynset(String),

    /// The hypernym relation contains a cycle through this synset.
    #[error("Hypernym cycle through synset {0}")]
    CyclicHierarchy(String),

    /// Two series cannot be rank-correlated.
    #[error("Invalid series for correlation: {reason}")]
    InvalidSeries { reason: String },

    /// A failure while processing one input record.
    #[error("{source} (record at line {line})")]
    Record {
        line: usize,
        #[source]
        source: Box<WsdError>,
    },

    /// Config file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WsdError {
    /// Attach the input line number of the record being processed.
    pub fn at_line(self, line: usize) -> Self {
        WsdError::Record {
            line,
            source: Box::new(self),
        }
    }

    /// The innermost error, with any record context stripped.
    pub fn root(&self) -> &WsdError {
        match self {
            WsdError::Record { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Convenience result type for resnik-wsd operations.
pub type WsdResult<T> = Result<T, WsdError>;
