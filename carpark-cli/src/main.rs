//! Main entry point for the carpark CLI.
//!
//! Runs a parking lot session:
//! - `carpark`: interactive mode, reading commands from stdin
//! - `carpark FILE`: script mode, running every command in `FILE`

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        data_dir: cli.data_dir,
    };

    // Handle errors and set exit code
    match cli.run.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
