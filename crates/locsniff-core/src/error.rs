// crates/locsniff-core/src/error.rs

use thiserror::Error;

/// Errors produced while initializing an engine.
///
/// A query that recognizes nothing is *not* an error: `sniff` returns an
/// empty [`crate::MatchResult`] for unrecognized input. These variants only
/// cover initialization — once a [`crate::Sniffer`] is built, lookups cannot
/// fail.
#[derive(Debug, Error)]
pub enum SniffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required external resource (dataset or alias file) is missing.
    /// Fatal: the engine cannot produce meaningful results without it.
    #[error("{0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, SniffError>;
