#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # carpark
//!
//! A library for simulating a fixed-capacity parking lot driven by text
//! commands.
//!
//! ## Core Types
//!
//! - [`ParkingLot`], [`Slot`] and [`SlotNumber`]: the slot store
//! - [`Vehicle`]: a registration number and colour
//! - [`Command`] and [`Dispatcher`]: parsing and running command lines
//! - [`Session`]: interactive and script drivers
//! - [`Notice`] and [`Outcome`]: informational results shown to the user
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use carpark::{Notice, ParkingLot};
//!
//! let mut lot = ParkingLot::new();
//! lot.create(3).unwrap();
//! lot.park("KA-01-HH-1234", "White").unwrap();
//! lot.park("KA-01-BB-0001", "Black").unwrap();
//!
//! let slots = lot.slot_numbers_for_colour("white").unwrap();
//! assert_eq!(slots[0].value(), 1);
//! assert_eq!(lot.slot_number_for_registration("XX-00"), Err(Notice::NotFound));
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod lot;
pub mod session;
pub mod vehicle;

// Re-export key types at crate root for convenience
pub use command::{Command, Dispatcher};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Notice, Outcome, Result};
pub use logging::{init_logger, install_logger, LogLevel, Logger};
pub use lot::{ParkingLot, Slot, SlotNumber};
pub use session::{Session, SessionOptions, SessionSummary};
pub use vehicle::Vehicle;
