//! Configuration system for carpark.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CARPARK_*`)
//! 3. An explicit file (via `ConfigBuilder::with_file`)
//! 4. Private project config (`carpark.local.yaml`)
//! 5. Project config (`carpark.yaml`)
//! 6. User config (`~/.carpark/config.yaml`)
//! 7. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use carpark::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("prompt: {:?}", config.prompt());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_PROMPT};
pub use validator::ConfigValidator;
