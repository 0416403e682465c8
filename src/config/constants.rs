// Project-wide constants
//
// Defaults for a run with no config file and no flags. Import via
// `use crate::config::constants::*;`.

/// Root directory scanned when `--src` is not given.
pub const DEFAULT_SOURCE_DIR: &str = "css";

/// Output file written when `--out` is not given.
pub const DEFAULT_OUTPUT: &str = "merged.css";

/// File-name suffix a file must end with to be merged.
pub const DEFAULT_SUFFIX: &str = ".css";

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "cssmerge.toml";
