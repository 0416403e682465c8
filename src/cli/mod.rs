// CLI module
// Thin shim between argument parsing and the merge pipeline

mod args;

pub use args::Cli;

use anyhow::{Context, Result};
use tracing::debug;

use crate::merge::run_merge;

/// Resolve configuration from `cli` and run one merge.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    debug!("Resolved config: {:?}", config);

    run_merge(&config).with_context(|| {
        format!(
            "Failed to merge {} into {}",
            config.source_dir.display(),
            config.output.display()
        )
    })?;

    Ok(())
}
