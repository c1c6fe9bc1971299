//! Command parsing and dispatch.
//!
//! A command line is a command name followed by whitespace-separated
//! arguments. Names are matched case-insensitively; surplus arguments are
//! ignored. Anything that cannot be understood becomes
//! [`Notice::InvalidInput`].
//!
//! # Examples
//!
//! ```
//! use carpark::command::Command;
//!
//! let command = Command::parse("PARK KA-01-HH-1234 White").unwrap();
//! assert_eq!(
//!     command,
//!     Some(Command::Park {
//!         registration: "KA-01-HH-1234".to_string(),
//!         colour: "White".to_string(),
//!     })
//! );
//! assert_eq!(Command::parse("   ").unwrap(), None);
//! ```

pub mod dispatcher;

pub use dispatcher::Dispatcher;

use std::fmt;

use crate::error::{Notice, Outcome};

/// Every command name understood by the dispatcher.
pub const COMMAND_NAMES: [&str; 8] = [
    "create_parking_lot",
    "park",
    "leave",
    "status",
    "registration_numbers_for_cars_with_colour",
    "slot_numbers_for_cars_with_colour",
    "slot_number_for_registration_number",
    "exit",
];

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_parking_lot N`
    CreateParkingLot {
        /// Requested number of slots; non-positive means "not created".
        capacity: i64,
    },
    /// `park REG COLOUR`
    Park {
        /// Registration number.
        registration: String,
        /// Vehicle colour.
        colour: String,
    },
    /// `leave N`
    Leave {
        /// 1-based slot to free.
        slot: i64,
    },
    /// `status`
    Status,
    /// `registration_numbers_for_cars_with_colour COLOUR`
    RegistrationNumbersForColour {
        /// Colour to look for.
        colour: String,
    },
    /// `slot_numbers_for_cars_with_colour COLOUR`
    SlotNumbersForColour {
        /// Colour to look for.
        colour: String,
    },
    /// `slot_number_for_registration_number REG`
    SlotNumberForRegistration {
        /// Registration number to look for.
        registration: String,
    },
    /// `exit`
    Exit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`Notice::InvalidInput`] for an unknown command, a missing
    /// argument, or a numeric argument that is not an integer.
    pub fn parse(line: &str) -> Outcome<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match name.to_lowercase().as_str() {
            "create_parking_lot" => Self::CreateParkingLot {
                capacity: integer(arg(&args, 0)?)?,
            },
            "park" => Self::Park {
                registration: arg(&args, 0)?.to_string(),
                colour: arg(&args, 1)?.to_string(),
            },
            "leave" => Self::Leave {
                slot: integer(arg(&args, 0)?)?,
            },
            "status" => Self::Status,
            "registration_numbers_for_cars_with_colour" => Self::RegistrationNumbersForColour {
                colour: arg(&args, 0)?.to_string(),
            },
            "slot_numbers_for_cars_with_colour" => Self::SlotNumbersForColour {
                colour: arg(&args, 0)?.to_string(),
            },
            "slot_number_for_registration_number" => Self::SlotNumberForRegistration {
                registration: arg(&args, 0)?.to_string(),
            },
            "exit" => Self::Exit,
            _ => return Err(Notice::InvalidInput),
        };

        Ok(Some(command))
    }

    /// Returns the canonical command name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateParkingLot { .. } => COMMAND_NAMES[0],
            Self::Park { .. } => COMMAND_NAMES[1],
            Self::Leave { .. } => COMMAND_NAMES[2],
            Self::Status => COMMAND_NAMES[3],
            Self::RegistrationNumbersForColour { .. } => COMMAND_NAMES[4],
            Self::SlotNumbersForColour { .. } => COMMAND_NAMES[5],
            Self::SlotNumberForRegistration { .. } => COMMAND_NAMES[6],
            Self::Exit => COMMAND_NAMES[7],
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateParkingLot { capacity } => write!(f, "{} {capacity}", self.name()),
            Self::Park {
                registration,
                colour,
            } => write!(f, "{} {registration} {colour}", self.name()),
            Self::Leave { slot } => write!(f, "{} {slot}", self.name()),
            Self::RegistrationNumbersForColour { colour }
            | Self::SlotNumbersForColour { colour } => write!(f, "{} {colour}", self.name()),
            Self::SlotNumberForRegistration { registration } => {
                write!(f, "{} {registration}", self.name())
            }
            Self::Status | Self::Exit => f.write_str(self.name()),
        }
    }
}

fn arg<'a>(args: &[&'a str], position: usize) -> Outcome<&'a str> {
    args.get(position).copied().ok_or(Notice::InvalidInput)
}

fn integer(text: &str) -> Outcome<i64> {
    text.parse().map_err(|_| Notice::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Outcome<Option<Command>> {
        Command::parse(line)
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("\n"), Ok(None));
        assert_eq!(parse(" \t "), Ok(None));
    }

    #[test]
    fn test_create_parking_lot() {
        assert_eq!(
            parse("create_parking_lot 6\n"),
            Ok(Some(Command::CreateParkingLot { capacity: 6 }))
        );
        assert_eq!(
            parse("create_parking_lot -2"),
            Ok(Some(Command::CreateParkingLot { capacity: -2 }))
        );
        assert_eq!(parse("create_parking_lot"), Err(Notice::InvalidInput));
        assert_eq!(parse("create_parking_lot six"), Err(Notice::InvalidInput));
        assert_eq!(parse("create_parking_lot 1.5"), Err(Notice::InvalidInput));
    }

    #[test]
    fn test_park() {
        assert_eq!(
            parse("park KA-01-HH-1234 White"),
            Ok(Some(Command::Park {
                registration: "KA-01-HH-1234".into(),
                colour: "White".into(),
            }))
        );
        assert_eq!(parse("park KA-01-HH-1234"), Err(Notice::InvalidInput));
        assert_eq!(parse("park"), Err(Notice::InvalidInput));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        assert_eq!(
            parse("park KA-01-HH-1234 White Sedan"),
            Ok(Some(Command::Park {
                registration: "KA-01-HH-1234".into(),
                colour: "White".into(),
            }))
        );
        assert_eq!(parse("status now"), Ok(Some(Command::Status)));
    }

    #[test]
    fn test_leave() {
        assert_eq!(parse("leave 4"), Ok(Some(Command::Leave { slot: 4 })));
        assert_eq!(parse("leave"), Err(Notice::InvalidInput));
        assert_eq!(parse("leave four"), Err(Notice::InvalidInput));
    }

    #[test]
    fn test_queries() {
        assert_eq!(
            parse("registration_numbers_for_cars_with_colour White"),
            Ok(Some(Command::RegistrationNumbersForColour {
                colour: "White".into()
            }))
        );
        assert_eq!(
            parse("slot_numbers_for_cars_with_colour White"),
            Ok(Some(Command::SlotNumbersForColour {
                colour: "White".into()
            }))
        );
        assert_eq!(
            parse("slot_number_for_registration_number KA-01-HH-3141"),
            Ok(Some(Command::SlotNumberForRegistration {
                registration: "KA-01-HH-3141".into()
            }))
        );
        assert_eq!(
            parse("registration_numbers_for_cars_with_colour"),
            Err(Notice::InvalidInput)
        );
        assert_eq!(
            parse("slot_numbers_for_cars_with_colour"),
            Err(Notice::InvalidInput)
        );
        assert_eq!(
            parse("slot_number_for_registration_number"),
            Err(Notice::InvalidInput)
        );
    }

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!(parse("STATUS"), Ok(Some(Command::Status)));
        assert_eq!(parse("Exit"), Ok(Some(Command::Exit)));
        assert_eq!(
            parse("Create_Parking_Lot 2"),
            Ok(Some(Command::CreateParkingLot { capacity: 2 }))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse("slot"), Err(Notice::InvalidInput));
        assert_eq!(parse("parking 3"), Err(Notice::InvalidInput));
    }

    #[test]
    fn test_name_and_display() {
        for line in [
            "create_parking_lot 6",
            "park KA-01-HH-1234 White",
            "leave 4",
            "status",
            "registration_numbers_for_cars_with_colour White",
            "slot_numbers_for_cars_with_colour White",
            "slot_number_for_registration_number KA-01-HH-3141",
            "exit",
        ] {
            let command = parse(line).unwrap().unwrap();
            assert_eq!(command.to_string(), line);
            assert!(COMMAND_NAMES.contains(&command.name()));
        }
    }
}
