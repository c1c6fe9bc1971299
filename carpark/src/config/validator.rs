//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::lot::MAX_CAPACITY;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use carpark::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { capacity: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref prompt) = config.prompt {
            if prompt.contains(['\n', '\r']) {
                return Err(Error::Validation {
                    field: "prompt".into(),
                    message: "Prompt must fit on a single line".into(),
                });
            }
        }

        if config.capacity == Some(0) {
            return Err(Error::Validation {
                field: "capacity".into(),
                message: "Capacity must be greater than 0".into(),
            });
        }

        if let Some(capacity) = config.capacity.filter(|&c| c > MAX_CAPACITY) {
            return Err(Error::Validation {
                field: "capacity".into(),
                message: format!("Capacity {capacity} exceeds the maximum of {MAX_CAPACITY}"),
            });
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }
}
