// Merge pipeline: aggregate a source tree, then write the result

pub mod aggregator;
pub mod error;
pub mod writer;

pub use aggregator::{aggregate, Aggregation, Aggregator};
pub use error::MergeError;
pub use writer::write;

use tracing::info;

use crate::config::MergeConfig;

/// Run one full merge described by `config`.
///
/// Aggregation completes before the destination is opened, so a read
/// failure leaves any existing output file untouched.
pub fn run_merge(config: &MergeConfig) -> Result<Aggregation, MergeError> {
    let aggregation = Aggregator::new(config.suffix.as_str()).aggregate(&config.source_dir)?;
    aggregation.write_to(&config.output)?;

    info!(
        "Merged {} file(s) from {} into {}",
        aggregation.manifest.len(),
        config.source_dir.display(),
        config.output.display()
    );

    Ok(aggregation)
}
