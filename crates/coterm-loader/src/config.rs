//! Configuration for the loader

use crate::LoaderError;
use coterm_domain::Partition;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the two sources live and how tolerant the parser is
///
/// # Examples
///
/// ```
/// use coterm_loader::LoaderConfig;
///
/// let config = LoaderConfig::from_toml(r#"
///     manual_source = "data/manual.tsv.gz"
///     all_source = "data/all.tsv.gz"
/// "#).unwrap();
/// assert_eq!(config.header_lines, 1);
/// assert_eq!(config.skip_limit, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Statistics computed from curated annotations only
    pub manual_source: PathBuf,

    /// Statistics computed from all annotations
    pub all_source: PathBuf,

    /// Lines at the top of each source to skip
    /// Default: 1
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,

    /// Malformed rows tolerated per source before the load aborts
    /// Default: 0 (strict)
    #[serde(default)]
    pub skip_limit: usize,
}

fn default_header_lines() -> usize {
    1
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            manual_source: PathBuf::from("data/coterms.manual.tsv.gz"),
            all_source: PathBuf::from("data/coterms.all.tsv.gz"),
            header_lines: default_header_lines(),
            skip_limit: 0,
        }
    }
}

impl LoaderConfig {
    /// Config for the two given sources with default parser settings
    pub fn with_sources(manual_source: impl Into<PathBuf>, all_source: impl Into<PathBuf>) -> Self {
        Self {
            manual_source: manual_source.into(),
            all_source: all_source.into(),
            ..Default::default()
        }
    }

    /// The source locator for a partition
    pub fn source_for(&self, partition: Partition) -> &Path {
        match partition {
            Partition::Manual => &self.manual_source,
            Partition::All => &self.all_source,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LoaderError> {
        for partition in Partition::BOTH {
            if self.source_for(partition).as_os_str().is_empty() {
                return Err(LoaderError::Config(format!(
                    "{} source location cannot be empty",
                    partition
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, LoaderError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
