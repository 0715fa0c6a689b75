//! Error types for fetching and exporting a localization project.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the localize pipeline
#[derive(Error, Debug)]
pub enum LocalizeError {
    /// Missing or invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network, DNS or timeout failure after all retry attempts
    #[error("Failed to reach Localize API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("Localize API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body is not JSON or lacks the `data` payload
    #[error("Malformed project response: {0}")]
    MalformedResponse(String),

    /// A language mapping could not be rendered into the output format
    #[error("Failed to serialize translations: {0}")]
    Serialization(String),

    /// Creating, writing or reading a path failed
    #[error("File error: {} - {}", .path.display(), .source)]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One or more stale language directories could not be removed
    #[error("{}", cleanup_message(.failures))]
    Cleanup { failures: Vec<(PathBuf, io::Error)> },
}

impl LocalizeError {
    /// Wrap an I/O error with the path it happened on
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LocalizeError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Whether a fetch attempt that failed with this error should be retried.
    ///
    /// Transport failures, rate limiting (429) and server errors (5xx) are
    /// transient. Client errors and malformed bodies are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            LocalizeError::Transport(_) => true,
            LocalizeError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

fn cleanup_message(failures: &[(PathBuf, io::Error)]) -> String {
    let noun = if failures.len() == 1 {
        "directory"
    } else {
        "directories"
    };
    let details = failures
        .iter()
        .map(|(path, err)| format!("{} ({})", path.display(), err))
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Failed to remove {} language {}: {}",
        failures.len(),
        noun,
        details
    )
}

/// Result type for localize operations
pub type Result<T> = std::result::Result<T, LocalizeError>;
