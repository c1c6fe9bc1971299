//! Status table output.
//!
//! The table layout is part of the external interface and must stay
//! byte-for-byte stable:
//!
//! ```text
//! Slot No.\tRegistration No\t\t\tColour
//! 1\t\tKA-01-HH-1234\t\t\tWhite
//! ```

use std::io::{self, Write};

use super::ParkingLot;

/// Header line of the status table.
pub const STATUS_HEADER: &str = "Slot No.\tRegistration No\t\t\tColour";

impl ParkingLot {
    /// Writes the status of the lot to `out`.
    ///
    /// A lot that is not created, or has nothing parked, produces the
    /// matching notice line instead of a table. Every line written ends with
    /// a newline.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use carpark::ParkingLot;
    ///
    /// let mut lot = ParkingLot::new();
    /// lot.create(2).unwrap();
    /// lot.park("KA-01-HH-1234", "White").unwrap();
    ///
    /// let mut out = Vec::new();
    /// lot.status(&mut out).unwrap();
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "Slot No.\tRegistration No\t\t\tColour\n1\t\tKA-01-HH-1234\t\t\tWhite\n"
    /// );
    /// ```
    pub fn status<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if let Err(notice) = self.check_queryable() {
            return writeln!(out, "{notice}");
        }

        writeln!(out, "{STATUS_HEADER}")?;
        for (number, vehicle) in self.occupants() {
            writeln!(
                out,
                "{number}\t\t{}\t\t\t{}",
                vehicle.registration(),
                vehicle.colour()
            )?;
        }
        Ok(())
    }
}
