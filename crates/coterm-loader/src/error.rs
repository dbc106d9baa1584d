//! Error types for loading co-occurring term sources

use coterm_domain::DomainError;
use thiserror::Error;

/// Errors that abort a load
///
/// Any of these means no store was produced; the caller decides whether to
/// fall back to an empty store.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// A source could not be opened, read or decompressed
    #[error("Failed to read {source_name} source: {source}")]
    Io {
        /// Which source failed (`MANUAL` or `ALL`)
        source_name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// More malformed rows than the configured skip limit
    #[error("{source_name} source: {skipped} malformed rows exceed the skip limit of {limit}")]
    SkipLimitExceeded {
        /// Which source was being read
        source_name: String,
        /// Rows skipped when the load was aborted
        skipped: usize,
        /// Configured skip limit
        limit: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A domain precondition failed while building the store
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl From<toml::de::Error> for LoaderError {
    fn from(e: toml::de::Error) -> Self {
        LoaderError::Config(format!("Failed to parse TOML: {}", e))
    }
}
