//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared by the run command: global
//! options, configuration loading and logger selection.

use crate::error::CliError;
use carpark::{init_logger, Config, ConfigBuilder, Logger};
use std::path::PathBuf;

/// Global CLI options.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. `overrides` built from command-line flags (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Project and user configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the logger for this run.
///
/// `--verbose` and `--quiet` win; otherwise the configured `log_mode`
/// (which already includes `CARPARK_LOG_MODE`) applies.
pub fn resolve_logger(global: &GlobalOptions, config: &Config) -> Logger {
    if global.verbose || global.quiet {
        return init_logger(global.verbose, global.quiet);
    }
    config
        .log_level()
        .map_or_else(|| init_logger(false, false), Logger::new)
}
