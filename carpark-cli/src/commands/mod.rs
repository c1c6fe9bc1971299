//! CLI command implementations.
//!
//! - `run`: run a session interactively or over an input file

pub mod run;

pub use run::RunCommand;
