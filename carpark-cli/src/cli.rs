//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! The tool has no subcommands: global options sit beside the arguments of
//! the single run command.

use crate::commands::RunCommand;
use clap::Parser;
use std::path::PathBuf;

/// Command-line parking lot simulator.
#[derive(Parser)]
#[command(name = "carpark")]
#[command(version, about = "Simulate a fixed-capacity parking lot", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Load this configuration file on top of the discovered ones
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", env = "CARPARK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunCommand,
}
