//! Configuration schema definitions.
//!
//! This module defines the configuration structure for carpark sessions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Prompt printed before each interactive command when none is configured.
pub const DEFAULT_PROMPT: &str = "$ ";

/// Complete configuration structure.
///
/// Every field is optional so that several sources can be layered; the
/// accessor methods supply the defaults.
///
/// # Examples
///
/// ```
/// use carpark::config::Config;
///
/// let config = Config {
///     capacity: Some(6),
///     ..Default::default()
/// };
/// assert_eq!(config.prompt(), "$ ");
/// assert!(!config.echo());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Prompt shown in interactive mode.
    pub prompt: Option<String>,

    /// Echo each script command before its response.
    pub echo: Option<bool>,

    /// Create the lot with this many slots when the session starts.
    pub capacity: Option<usize>,

    /// Log verbosity: quiet, normal or verbose.
    pub log_mode: Option<String>,
}

impl Config {
    /// Returns the interactive prompt, falling back to [`DEFAULT_PROMPT`].
    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Returns whether script commands are echoed.
    #[must_use]
    pub fn echo(&self) -> bool {
        self.echo.unwrap_or(false)
    }

    /// Returns the configured log level, if one is set and valid.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
    }
}
