//! All data types for the resnik-wsd library.

pub mod error;
pub mod record;
pub mod synset;

pub use error::{WsdError, WsdResult};
pub use record::{JudgmentRecord, ProbeRecord};
pub use synset::{normalize_lemma, SimilarityResult, Synset, SynsetId};

/// Part-of-speech tag carried by every synset name (`bank.n.01`).
pub const NOUN_POS: char = 'n';

/// Header prefix of an information-content counts file.
pub const IC_HEADER_PREFIX: &str = "wnver::";

/// Marker on a counts line flagging a hierarchy root.
pub const ROOT_MARKER: &str = "ROOT";

/// Separator between a probe word and its context list.
pub const PROBE_SEPARATOR: char = '\t';

/// Separator between context words and between judgment fields.
pub const FIELD_SEPARATOR: char = ',';
