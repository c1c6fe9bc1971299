//! Error types for the carpark library.
//!
//! Two families live here. [`Notice`] covers the informational outcomes of
//! lot operations ("lot is full", "Not Found", ...): they are shown to the
//! user and never end a session. [`Error`] covers real failures such as
//! unreadable input or broken configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a carpark error.
///
/// # Examples
///
/// ```
/// use carpark::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(6)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Result of a lot operation: the value on success, or the notice to show.
///
/// # Examples
///
/// ```
/// use carpark::{Notice, Outcome, ParkingLot};
///
/// let mut lot = ParkingLot::new();
/// let outcome: Outcome<_> = lot.park("KA-01-HH-1234", "White");
/// assert_eq!(outcome, Err(Notice::LotNotCreated));
/// ```
pub type Outcome<T> = std::result::Result<T, Notice>;

/// Informational outcome of a lot operation.
///
/// The `Display` text of each variant is exactly what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Notice {
    /// No lot has been created yet, or it was created with a non-positive size.
    #[error("Sorry, parking lot is not created")]
    LotNotCreated,

    /// Every slot is occupied.
    #[error("Sorry, parking lot is full")]
    LotFull,

    /// No slot is occupied.
    #[error("Sorry, parking slot is empty")]
    LotEmpty,

    /// The slot asked to be freed holds no vehicle.
    #[error("Sorry, parking lot is already free")]
    SlotAlreadyFree,

    /// The slot number lies outside the lot.
    #[error("Sorry, parking slot is not available")]
    SlotNotAvailable,

    /// A lookup matched no vehicle.
    #[error("Not Found")]
    NotFound,

    /// The command line could not be understood.
    #[error("Invalid input")]
    InvalidInput,
}

/// The main error type for the carpark library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A path could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is unusable.
        reason: String,
    },
}

impl Error {
    /// Check if error came from reading or writing a stream or file.
    ///
    /// # Examples
    ///
    /// ```
    /// use carpark::Error;
    ///
    /// let err = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    /// assert!(err.is_io());
    /// ```
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::InvalidPath { .. })
    }

    /// Check if error is configuration-related.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Validation { .. })
    }
}
