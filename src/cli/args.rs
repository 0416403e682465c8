// Command-line arguments

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{load_config, MergeConfig};

#[derive(Parser, Debug)]
#[command(
    name = "cssmerge",
    version,
    about = "Merge every stylesheet under a directory into a single file"
)]
pub struct Cli {
    /// Root directory to scan [default: css]
    #[arg(long, value_name = "DIR")]
    pub src: Option<PathBuf>,

    /// Output file [default: merged.css]
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Only merge files whose name ends with this [default: .css]
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// TOML config file (falls back to ./cssmerge.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file and apply flag overrides on top.
    pub fn resolve_config(&self) -> Result<MergeConfig> {
        let base = load_config(self.config.as_deref())?;
        Ok(self.apply_overrides(base))
    }

    /// Flags win over whatever the config file said.
    pub fn apply_overrides(&self, mut config: MergeConfig) -> MergeConfig {
        if let Some(src) = &self.src {
            config.source_dir = src.clone();
        }
        if let Some(out) = &self.out {
            config.output = out.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "cssmerge",
            "--src",
            "styles",
            "--out",
            "dist/site.css",
            "--suffix",
            ".scss",
            "--config",
            "merge.toml",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.src, Some(PathBuf::from("styles")));
        assert_eq!(cli.out, Some(PathBuf::from("dist/site.css")));
        assert_eq!(cli.suffix.as_deref(), Some(".scss"));
        assert_eq!(cli.config, Some(PathBuf::from("merge.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["cssmerge"]).unwrap();
        let config = cli.apply_overrides(MergeConfig::default());
        assert_eq!(config, MergeConfig::default());
    }

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::try_parse_from(["cssmerge", "--out", "bundle.css"]).unwrap();
        let base = MergeConfig {
            source_dir: PathBuf::from("from-file"),
            output: PathBuf::from("from-file.css"),
            suffix: ".less".to_string(),
        };

        let config = cli.apply_overrides(base);
        assert_eq!(config.source_dir, PathBuf::from("from-file"));
        assert_eq!(config.output, PathBuf::from("bundle.css"));
        assert_eq!(config.suffix, ".less");
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["cssmerge", "--watch"]).is_err());
    }
}
