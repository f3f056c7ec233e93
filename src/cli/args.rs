//! CLI argument definitions using clap

use clap::Parser;

/// Biblioteca - digital library management over JSON snapshots
#[derive(Parser, Debug)]
#[command(name = "biblioteca")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the snapshot files
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Log level filter, e.g. "info" or "biblioteca=debug"
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
