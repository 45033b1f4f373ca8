//! Error handling for the ingestion and persistence pipeline.
//!
//! Row-level problems never surface here: the parser absorbs them and counts
//! the drops. These variants cover whole-batch and collaborator failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HazmapError {
    #[error("batch is not a sequence of records: {reason}")]
    MalformedBatch { reason: String },

    #[error("unsupported dataset format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("store rejected batch of {count} readings")]
    Store {
        count: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, HazmapError>;
