//! CLI entry point for the tile-swap scramble preview tool

use clap::Parser;
use tileswap::io::cli::{Cli, FileProcessor};
use tileswap::io::logging::init_tracing;

fn main() -> tileswap::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
