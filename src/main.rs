// cssmerge - Main entry point

use anyhow::Result;
use clap::Parser;

use cssmerge::cli::{run, Cli};
use cssmerge::logging::init_tracing;

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing
    init_tracing(args.verbose);

    run(&args)
}
