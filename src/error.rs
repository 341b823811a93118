//! Error types for bytematch operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the comparison and its tooling.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A file could not be read (missing, unreadable, or a directory).
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid logging configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
