//! Error types for the query service

use coterm_domain::DomainError;
use coterm_loader::LoaderError;
use thiserror::Error;

/// Errors surfaced by the service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Rejected caller input; a REST layer maps this to a 4xx response
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to read the config file
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Loading the sources failed
    #[error("Load error: {0}")]
    Loader(#[from] LoaderError),

    /// The reload worker's blocking task failed
    #[error("Worker error: {0}")]
    Worker(String),
}

impl From<DomainError> for ServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidArgument(message) => ServiceError::InvalidArgument(message),
        }
    }
}
