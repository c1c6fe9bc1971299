//! Slot numbers and slot contents.

use std::fmt;

use crate::vehicle::Vehicle;

/// A 1-based slot number.
///
/// Slot 0 does not exist; the first slot of every lot is slot 1.
///
/// # Examples
///
/// ```
/// use carpark::SlotNumber;
///
/// let slot = SlotNumber::try_from(3_usize).unwrap();
/// assert_eq!(slot.value(), 3);
/// assert_eq!(slot.index(), 2);
/// assert!(SlotNumber::try_from(0_usize).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotNumber(usize);

impl SlotNumber {
    /// The first slot of a lot.
    pub const FIRST: Self = Self(1);

    /// Builds the slot number for a 0-based position in the lot.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the 1-based number.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Returns the 0-based position in the lot.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 - 1
    }
}

impl TryFrom<usize> for SlotNumber {
    type Error = InvalidSlotNumberError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidSlotNumberError { value: 0 })
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<i64> for SlotNumber {
    type Error = InvalidSlotNumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map_err(|_| InvalidSlotNumberError { value })
            .and_then(Self::try_from)
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for slot numbers below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSlotNumberError {
    /// The rejected value.
    pub value: i64,
}

impl fmt::Display for InvalidSlotNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid slot number {}: slots are numbered from 1", self.value)
    }
}

impl std::error::Error for InvalidSlotNumberError {}

/// Contents of one slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    /// Nothing parked here.
    #[default]
    Empty,
    /// A vehicle is parked here.
    Occupied(Vehicle),
}

impl Slot {
    /// Returns `true` if no vehicle is parked in the slot.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the parked vehicle, if any.
    #[must_use]
    pub const fn vehicle(&self) -> Option<&Vehicle> {
        match self {
            Self::Empty => None,
            Self::Occupied(vehicle) => Some(vehicle),
        }
    }

    /// Empties the slot, returning the vehicle that was parked.
    pub fn take(&mut self) -> Option<Vehicle> {
        match std::mem::take(self) {
            Self::Empty => None,
            Self::Occupied(vehicle) => Some(vehicle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_number_conversions() {
        let slot = SlotNumber::try_from(1usize).unwrap();
        assert_eq!(slot, SlotNumber::FIRST);
        assert_eq!(slot.index(), 0);
        assert_eq!(SlotNumber::from_index(4).value(), 5);
    }

    #[test]
    fn test_slot_number_rejects_zero_and_negative() {
        assert_eq!(
            SlotNumber::try_from(0usize),
            Err(InvalidSlotNumberError { value: 0 })
        );
        assert_eq!(
            SlotNumber::try_from(-3i64),
            Err(InvalidSlotNumberError { value: -3 })
        );
        assert_eq!(SlotNumber::try_from(7i64).unwrap().value(), 7);
    }

    #[test]
    fn test_slot_number_ordering_and_display() {
        let a = SlotNumber::from_index(0);
        let b = SlotNumber::from_index(1);
        assert!(a < b);
        assert_eq!(b.to_string(), "2");
    }

    #[test]
    fn test_slot_take() {
        let mut slot = Slot::Occupied(Vehicle::new("KA-01-HH-1234", "White"));
        assert!(!slot.is_empty());
        assert_eq!(slot.vehicle().map(Vehicle::colour), Some("White"));

        let taken = slot.take();
        assert_eq!(taken, Some(Vehicle::new("KA-01-HH-1234", "White")));
        assert!(slot.is_empty());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_vehicle_with_empty_fields_occupies_slot() {
        let slot = Slot::Occupied(Vehicle::new("", ""));
        assert!(!slot.is_empty());
    }
}
