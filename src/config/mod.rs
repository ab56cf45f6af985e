//! Run configuration.

pub mod loader;

pub use loader::{
    load_config, parse_config, EvaluationConfig, InputConfig, OutputConfig, OutputFormat,
    RunConfig, RunOverrides,
};
