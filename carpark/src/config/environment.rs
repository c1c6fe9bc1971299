//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `CARPARK_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LOG_MODE_ENV;
use std::env;

/// Overrides the interactive prompt.
pub const PROMPT_ENV: &str = "CARPARK_PROMPT";

/// Enables or disables echoing of script commands.
pub const ECHO_ENV: &str = "CARPARK_ECHO";

/// Creates the lot with this capacity at start-up.
pub const CAPACITY_ENV: &str = "CARPARK_CAPACITY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use carpark::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric capacity, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(prompt) = env::var(PROMPT_ENV) {
            config.prompt = Some(prompt);
        }

        if let Ok(val) = env::var(ECHO_ENV) {
            config.echo = Some(Self::parse_bool(ECHO_ENV, &val)?);
        }

        if let Ok(capacity) = env::var(CAPACITY_ENV) {
            config.capacity = Some(capacity.trim().parse().map_err(|_| Error::Validation {
                field: CAPACITY_ENV.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(mode);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
