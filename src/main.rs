//! CLI entry point for the Mondrian-style image filter

use clap::Parser;
use mondrify::io::cli::{Cli, FileProcessor};

fn main() -> mondrify::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
