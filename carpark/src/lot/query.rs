//! Lookups by colour and registration number.
//!
//! Every lookup first reports the lot state (not created, then empty), and
//! only then searches. Matching ignores case. Results come back in
//! ascending slot order; an empty result is reported as
//! [`Notice::NotFound`].

use super::{ParkingLot, SlotNumber};
use crate::error::{Notice, Outcome};

impl ParkingLot {
    /// Registration numbers of every vehicle with the given colour.
    ///
    /// # Errors
    ///
    /// [`Notice::LotNotCreated`], [`Notice::LotEmpty`] or [`Notice::NotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use carpark::ParkingLot;
    ///
    /// let mut lot = ParkingLot::new();
    /// lot.create(3).unwrap();
    /// lot.park("KA-01-HH-1234", "White").unwrap();
    /// lot.park("KA-01-BB-0001", "Black").unwrap();
    /// lot.park("KA-01-HH-9999", "White").unwrap();
    ///
    /// let regs = lot.registration_numbers_for_colour("white").unwrap();
    /// assert_eq!(regs, vec!["KA-01-HH-1234", "KA-01-HH-9999"]);
    /// ```
    pub fn registration_numbers_for_colour(&self, colour: &str) -> Outcome<Vec<&str>> {
        self.check_queryable()?;
        non_empty(
            self.occupants()
                .filter(|(_, vehicle)| vehicle.has_colour(colour))
                .map(|(_, vehicle)| vehicle.registration())
                .collect(),
        )
    }

    /// Slot numbers of every vehicle with the given colour.
    ///
    /// # Errors
    ///
    /// [`Notice::LotNotCreated`], [`Notice::LotEmpty`] or [`Notice::NotFound`].
    pub fn slot_numbers_for_colour(&self, colour: &str) -> Outcome<Vec<SlotNumber>> {
        self.check_queryable()?;
        non_empty(
            self.occupants()
                .filter(|(_, vehicle)| vehicle.has_colour(colour))
                .map(|(number, _)| number)
                .collect(),
        )
    }

    /// Slot number of the first vehicle with the given registration number.
    ///
    /// # Errors
    ///
    /// [`Notice::LotNotCreated`], [`Notice::LotEmpty`] or [`Notice::NotFound`].
    pub fn slot_number_for_registration(&self, registration: &str) -> Outcome<SlotNumber> {
        self.check_queryable()?;
        self.occupants()
            .find(|(_, vehicle)| vehicle.has_registration(registration))
            .map(|(number, _)| number)
            .ok_or(Notice::NotFound)
    }
}

fn non_empty<T>(matches: Vec<T>) -> Outcome<Vec<T>> {
    if matches.is_empty() {
        Err(Notice::NotFound)
    } else {
        Ok(matches)
    }
}

/// Joins query results the way they are shown to the user: `"a, b, c"`.
///
/// # Examples
///
/// ```
/// use carpark::lot::query::join;
///
/// assert_eq!(join(&[1, 2, 3]), "1, 2, 3");
/// assert_eq!(join(&["KA-01-HH-1234"]), "KA-01-HH-1234");
/// ```
pub fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
