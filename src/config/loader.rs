// Configuration loader
// Loads merge settings from an explicit TOML file, ./cssmerge.toml, or defaults

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::constants::CONFIG_FILE_NAME;
use super::settings::MergeConfig;

/// Load configuration for this run.
///
/// An explicit path must exist. Without one, `cssmerge.toml` in the working
/// directory is used if present, otherwise the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<MergeConfig> {
    let cwd = std::env::current_dir().context("Could not determine working directory")?;
    load_config_in(&cwd, explicit)
}

/// Same as [`load_config`], looking for the implicit file in `dir`.
pub fn load_config_in(dir: &Path, explicit: Option<&Path>) -> Result<MergeConfig> {
    if let Some(path) = explicit {
        return load_from_file(path);
    }

    let implicit = dir.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        return load_from_file(&implicit);
    }

    debug!("No {} found in {}, using defaults", CONFIG_FILE_NAME, dir.display());
    Ok(MergeConfig::default())
}

fn load_from_file(path: &Path) -> Result<MergeConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&contents)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse TOML text into a [`MergeConfig`]; missing keys take their defaults.
pub fn parse_config(contents: &str) -> Result<MergeConfig> {
    toml::from_str(contents).context("Failed to parse TOML")
}
