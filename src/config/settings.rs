// Configuration structs

use super::constants::{DEFAULT_OUTPUT, DEFAULT_SOURCE_DIR, DEFAULT_SUFFIX};
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for a single merge run.
///
/// Built once per invocation from defaults, an optional TOML file and
/// command-line overrides, then passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// Root directory to scan recursively
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Destination file for the merged output
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Only files whose name ends with this are merged
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output: default_output(),
            suffix: default_suffix(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}
