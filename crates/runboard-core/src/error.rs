//! Error types for runboard-core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunboardError {
    #[error("tag `{0}` does not name a metric (ends in a directory)")]
    InvalidTag(String),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("writer is closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, RunboardError>;
