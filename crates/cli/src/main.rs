//! Dirpace CLI - dirpace command

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Dirpace - progress readout for a folder filling with files
#[derive(Parser)]
#[command(name = "dirpace")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory whose entry count to watch
    folder: PathBuf,

    /// Entry count at which monitoring stops
    target: u64,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    monitor::watch(&cli.folder, cli.target, |report| {
        println!("{}", report.render());
    })
}
