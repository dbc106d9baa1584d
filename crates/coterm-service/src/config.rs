//! Configuration file parsing for the service.
//!
//! Loads the default result limit, the reload schedule and the loader's
//! source settings from TOML.

use crate::ServiceError;
use coterm_loader::LoaderConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Service configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Results returned when the caller gives no limit (default: 50)
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Minutes between scheduled reloads; absent disables reloading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload_interval_minutes: Option<u64>,

    /// Source locations and parser settings
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Default result limit: 50
fn default_limit() -> usize {
    50
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            reload_interval_minutes: None,
            loader: LoaderConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ServiceError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ServiceError> {
        let config: ServiceConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.default_limit == 0 {
            return Err(ServiceError::Config(
                "default_limit must be greater than 0".to_string(),
            ));
        }
        if let Some(minutes) = self.reload_interval_minutes {
            if minutes == 0 {
                return Err(ServiceError::Config(
                    "reload_interval_minutes must be greater than 0".to_string(),
                ));
            }
            if minutes.checked_mul(60).is_none() {
                return Err(ServiceError::Config(format!(
                    "reload_interval_minutes {} is too large",
                    minutes
                )));
            }
        }
        self.loader.validate()?;
        Ok(())
    }

    /// Reload interval as a Duration, if reloading is enabled
    pub fn reload_interval(&self) -> Option<Duration> {
        self.reload_interval_minutes
            .map(|minutes| Duration::from_secs(minutes.saturating_mul(60)))
    }
}
