//! Error types for the benchmark harness

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a benchmark run
///
/// Every variant is fatal: a partially completed trial set would corrupt
/// the comparability of the report, so nothing is retried or skipped.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error on the report stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document could not be read
    #[error("failed to read {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An adapter operation failed on input assumed valid
    #[error("adapter '{adapter}' failed: {message}")]
    Adapter { adapter: &'static str, message: String },

    /// Registry or protocol misconfiguration
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap a library error raised inside adapter `name`
    pub fn adapter(name: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Adapter {
            adapter: name,
            message: err.to_string(),
        }
    }
}
