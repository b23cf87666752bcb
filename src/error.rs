//! Error handling types and utilities.

use std::path::PathBuf;
use std::time::Duration;

/// A specialized Result type for rosterdex configuration and CLI plumbing.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when fetching or parsing the search dataset fails.
///
/// These never escape [`DatasetLoader::load`](crate::loader::DatasetLoader::load);
/// the loader logs them and falls back to an empty dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    Status { url: String, status: u16 },
    /// The dataset file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The body was not a valid search document.
    #[error("failed to parse search data: {0}")]
    Parse(#[from] serde_json::Error),
    /// The fetch did not finish within the configured bound.
    #[error("fetching {source_name} timed out after {elapsed:?}")]
    Timeout {
        source_name: String,
        elapsed: Duration,
    },
}

impl LoadError {
    /// HTTP status of the failed response, if the failure was a status error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
