use std::path::Path;

use anyhow::Context;

use crate::config::RunConfig;
use crate::env;

/// Load the run configuration from the process environment
///
/// A `.env` file is loaded first if one is found by searching upwards from
/// the current directory. Variables already set in the process environment
/// are never overridden by the file, and a missing file is silently
/// skipped. Missing pass-through variables propagate as absent entries, so
/// this cannot fail.
///
/// Calling this twice against an unchanged environment yields structurally
/// equal configurations.
pub fn load_configuration() -> RunConfig {
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded env file from {}", path.display()),
        Err(e) => log::debug!("Not loading an env file ({e}), using the process environment as-is"),
    }

    RunConfig::new(env::capture())
}

/// Load the run configuration using a specific env file
///
/// Unlike [load_configuration], the file was asked for by name, so failing
/// to read it is an error.
pub fn load_configuration_from<P: AsRef<Path>>(path: P) -> anyhow::Result<RunConfig> {
    let path = path.as_ref();
    dotenvy::from_path(path)
        .with_context(|| format!("Failed to load env file from {}", path.display()))?;
    log::debug!("Loaded env file from {}", path.display());

    Ok(RunConfig::new(env::capture()))
}
