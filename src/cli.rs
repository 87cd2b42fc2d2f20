//! CLI argument parsing module for gomodup

use clap::Parser;

/// Interactive Go module updater
#[derive(Parser, Debug, Clone)]
#[command(name = "gomodup", version, about = "Interactive Go module updater")]
pub struct CliArgs {
    /// Number of list entries shown per page in the selection prompt
    #[arg(short = 'p', long = "page-size", default_value_t = 10)]
    pub page_size: usize,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
