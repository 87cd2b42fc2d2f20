//! gomodup - interactive Go module updater
//!
//! Discovers direct module dependencies with newer versions available,
//! lets the operator pick a subset, and upgrades them one at a time.

use clap::Parser;
use gomodup::apply::apply;
use gomodup::cli::CliArgs;
use gomodup::discover::discover;
use gomodup::progress::Progress;
use gomodup::select::{choose, Selection};
use gomodup::toolchain::SystemToolchain;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let toolchain = SystemToolchain::new();
    let mut progress = Progress::default();
    let records = discover(&toolchain, args.verbose, &mut progress)?;

    if records.is_empty() {
        println!("All modules are up to date");
        return Ok(ExitCode::SUCCESS);
    }

    match choose(&records, args.page_size)? {
        Selection::Interrupted => {
            // Operator cancel is a normal outcome, not an error
            println!("Bye");
            Ok(ExitCode::SUCCESS)
        }
        Selection::Chosen(selected) => {
            apply(&toolchain, &selected);
            Ok(ExitCode::SUCCESS)
        }
    }
}
