//! Command dispatcher.
//!
//! The dispatcher owns the [`ParkingLot`] of a session and turns each
//! command into the response text written to the output sink.

use std::io::{self, Write};
use std::ops::ControlFlow;

use super::Command;
use crate::error::{Notice, Outcome};
use crate::lot::query::join;
use crate::lot::ParkingLot;

/// Routes commands to the lot and writes their responses.
///
/// # Examples
///
/// ```
/// use carpark::Dispatcher;
/// use std::ops::ControlFlow;
///
/// let mut dispatcher = Dispatcher::new();
/// let mut out = Vec::new();
///
/// dispatcher.dispatch("create_parking_lot 2", &mut out).unwrap();
/// dispatcher.dispatch("park KA-01-HH-1234 White", &mut out).unwrap();
/// let flow = dispatcher.dispatch("exit", &mut out).unwrap();
///
/// assert_eq!(flow, ControlFlow::Break(()));
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Created parking lot with 2 slots\nAllocated slot number: 1\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    lot: ParkingLot,
}

impl Dispatcher {
    /// Creates a dispatcher over a lot that is not created yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lot: ParkingLot::new(),
        }
    }

    /// Creates a dispatcher over an existing lot.
    #[must_use]
    pub const fn with_lot(lot: ParkingLot) -> Self {
        Self { lot }
    }

    /// Returns the lot commands operate on.
    #[must_use]
    pub const fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    /// Parses and runs one line, writing the response to `out`.
    ///
    /// Blank lines produce no output. Returns `ControlFlow::Break` when the
    /// line was an `exit` command.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn dispatch<W: Write + ?Sized>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> io::Result<ControlFlow<()>> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command, out),
            Ok(None) => Ok(ControlFlow::Continue(())),
            Err(notice) => {
                log::debug!("rejected input {:?}", line.trim_end());
                writeln!(out, "{notice}")?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    /// Runs a parsed command, writing the response to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn execute<W: Write + ?Sized>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> io::Result<ControlFlow<()>> {
        log::debug!("dispatching {command}");

        match command {
            Command::Status => self.lot.status(out)?,
            Command::Exit => return Ok(ControlFlow::Break(())),
            other => {
                let response = self.respond(other);
                writeln!(out, "{response}")?;
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Runs a single-line command and returns its response text.
    ///
    /// `status` spans several lines and `exit` has no response; both are
    /// handled by [`Dispatcher::execute`] and yield an empty string here.
    pub fn respond(&mut self, command: Command) -> String {
        let outcome: Outcome<String> = match command {
            Command::CreateParkingLot { capacity } => self
                .lot
                .create(capacity)
                .map(|size| format!("Created parking lot with {size} slots")),
            Command::Park {
                registration,
                colour,
            } => self
                .lot
                .park(registration, colour)
                .map(|slot| format!("Allocated slot number: {slot}")),
            Command::Leave { slot } => self
                .lot
                .leave(slot)
                .map(|slot| format!("Slot number {slot} is free")),
            Command::RegistrationNumbersForColour { colour } => self
                .lot
                .registration_numbers_for_colour(&colour)
                .map(|regs| join(&regs)),
            Command::SlotNumbersForColour { colour } => self
                .lot
                .slot_numbers_for_colour(&colour)
                .map(|slots| join(&slots)),
            Command::SlotNumberForRegistration { registration } => self
                .lot
                .slot_number_for_registration(&registration)
                .map(|slot| slot.to_string()),
            Command::Status | Command::Exit => Ok(String::new()),
        };

        outcome.unwrap_or_else(|notice: Notice| notice.to_string())
    }
}
