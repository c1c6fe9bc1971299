//! Build script for carpark-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/run.rs.
fn build_cli() -> Command {
    Command::new("carpark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulate a fixed-capacity parking lot")
        .long_about(
            "Command-line parking lot simulator. Without FILE, commands are read \
             interactively from standard input; with FILE, every line of it is run.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file on top of the discovered ones")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .env("CARPARK_DATA_DIR"),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .help("Prompt shown before each interactive command")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("echo")
                .long("echo")
                .help("Echo each command from the file before its response")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("File of commands to run; reads stdin interactively when omitted")
                .action(ArgAction::Append),
        )
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var("OUT_DIR")
        .map(PathBuf::from)
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("carpark.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
