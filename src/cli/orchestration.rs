//! Validation workflow
//!
//! Ties together the pieces `main` needs: acquire the raw parameters from
//! parsed flags and the environment, validate them once, and return the
//! configuration the changelog generator consumes.

use log::{debug, info};

use crate::cli::Args;
use crate::config::{ChangelogConfig, RawConfig};
use crate::env::EnvSource;
use crate::error::Result;

/// Acquire and validate the changelog configuration.
///
/// # Arguments
/// * `args` - Parsed command-line flags
/// * `env` - Source for the GitHub token
///
/// # Returns
/// * `Ok(ChangelogConfig)` - Parameters are consistent
/// * `Err(ConfigError)` - The first rule the parameters violate
pub fn run(args: Args, env: &impl EnvSource) -> Result<ChangelogConfig> {
    let raw = RawConfig::acquire(args, env);
    debug!("acquired parameters: {:?}", raw);

    let config = raw.validate()?;
    debug!("resolved mode: {:?}", config.mode());
    info!(
        "configuration valid for {} ({})",
        config.slug(),
        config.mode()
    );

    Ok(config)
}
