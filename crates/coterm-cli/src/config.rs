//! Builds the service configuration from the config file and flags.

use crate::cli::Cli;
use crate::error::Result;
use coterm_service::ServiceConfig;
use std::path::Path;

/// Read the config file if one was given, then apply source overrides.
pub fn service_config(cli: &Cli) -> Result<ServiceConfig> {
    let mut config = match &cli.config {
        Some(path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::default(),
    };
    apply_overrides(&mut config, cli.manual.as_deref(), cli.all.as_deref());
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut ServiceConfig, manual: Option<&Path>, all: Option<&Path>) {
    if let Some(manual) = manual {
        config.loader.manual_source = manual.to_path_buf();
    }
    if let Some(all) = all {
        config.loader.all_source = all.to_path_buf();
    }
}
