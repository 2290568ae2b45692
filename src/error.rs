use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while reading and validating the orders file. All of these are
/// fatal: the aggregated totals are only meaningful over a fully valid
/// input set, so ingestion never skips a bad line and continues.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("line {line}: malformed order record: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: missing required field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid `created_at` timestamp {value:?} (expected YYYY-MM-DDTHH:MM:SSZ)")]
    InvalidTimestamp { line: usize, value: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The lower-bound date string did not parse. The CLI validates the string
/// before calling into the pipeline, but the core rejects it as well.
#[derive(Debug, Error)]
#[error("invalid from-date {input:?} (expected YYYY-MM-DD)")]
pub struct FromDateError {
    pub input: String,
}
