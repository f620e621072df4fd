//! `overlay` command-line entry point

use clap::Parser;
use overlay_cli::{commands::Commands, CliResult};

/// Resolve OCR chunk bounding boxes into highlight overlays
#[derive(Debug, Parser)]
#[command(name = "overlay", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}
