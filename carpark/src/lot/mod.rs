//! The parking lot: a fixed-capacity, ordered store of slots.
//!
//! This module implements the allocation policy. A lot is created with a
//! fixed number of slots, vehicles always go into the lowest-numbered empty
//! slot, and a vehicle stays in its slot until that slot is explicitly
//! freed. Resizing is not supported: creating the lot again throws away
//! everything that was parked.
//!
//! # Examples
//!
//! ```
//! use carpark::{Notice, ParkingLot};
//!
//! let mut lot = ParkingLot::new();
//! assert_eq!(lot.create(2), Ok(2));
//!
//! assert_eq!(lot.park("KA-01-HH-1234", "White").unwrap().value(), 1);
//! assert_eq!(lot.park("KA-01-HH-9999", "Black").unwrap().value(), 2);
//! assert_eq!(lot.park("KA-01-BB-0001", "Red"), Err(Notice::LotFull));
//!
//! assert_eq!(lot.leave(1).unwrap().value(), 1);
//! assert_eq!(lot.park("KA-01-BB-0001", "Red").unwrap().value(), 1);
//! ```

pub mod query;
pub mod slot;
pub mod status;

#[cfg(test)]
mod proptests;

pub use slot::{InvalidSlotNumberError, Slot, SlotNumber};

use crate::error::{Notice, Outcome};
use crate::vehicle::Vehicle;

/// Largest number of slots a lot may have.
pub const MAX_CAPACITY: usize = 1_000_000;

/// A fixed-capacity parking lot.
///
/// A lot with capacity 0 is "not created": every operation other than
/// [`ParkingLot::create`] reports [`Notice::LotNotCreated`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParkingLot {
    slots: Vec<Slot>,
}

impl ParkingLot {
    /// Creates a lot that has not been sized yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a lot with `capacity` empty slots.
    ///
    /// A capacity of 0, or one above [`MAX_CAPACITY`], yields a lot that is
    /// not created.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut lot = Self::new();
        if lot.allocate(capacity).is_err() {
            log::warn!("cannot create a parking lot with {capacity} slots");
        }
        lot
    }

    /// (Re)creates the lot with `count` empty slots.
    ///
    /// Any previous contents are discarded, whatever `count` is. A
    /// non-positive count leaves the lot not created.
    ///
    /// # Errors
    ///
    /// Returns [`Notice::LotNotCreated`] when `count <= 0`, when `count`
    /// exceeds [`MAX_CAPACITY`], or when the slots cannot be allocated.
    pub fn create(&mut self, count: i64) -> Outcome<usize> {
        self.slots = Vec::new();

        let capacity = usize::try_from(count).map_err(|_| Notice::LotNotCreated)?;
        self.allocate(capacity)?;
        log::info!("created parking lot with {capacity} slots");
        Ok(capacity)
    }

    /// Replaces the (empty) slot vector with `capacity` empty slots.
    fn allocate(&mut self, capacity: usize) -> Outcome<usize> {
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(Notice::LotNotCreated);
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| Notice::LotNotCreated)?;
        slots.resize(capacity, Slot::Empty);
        self.slots = slots;
        Ok(capacity)
    }

    /// Returns `true` once the lot has been created with at least one slot.
    #[must_use]
    pub fn is_created(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Returns `true` if every slot is occupied.
    ///
    /// Vacuously `true` for a lot that is not created; check
    /// [`ParkingLot::is_created`] first when the distinction matters.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Returns `true` if no slot is occupied.
    ///
    /// Vacuously `true` for a lot that is not created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    /// Returns the contents of a slot, or `None` if the slot is outside the lot.
    #[must_use]
    pub fn slot(&self, number: SlotNumber) -> Option<&Slot> {
        self.slots.get(number.index())
    }

    /// Iterates over occupied slots in ascending slot order.
    pub fn occupants(&self) -> impl Iterator<Item = (SlotNumber, &Vehicle)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.vehicle().map(|v| (SlotNumber::from_index(index), v)))
    }

    /// Parks a vehicle in the lowest-numbered empty slot.
    ///
    /// # Errors
    ///
    /// - [`Notice::LotNotCreated`] if the lot has no slots
    /// - [`Notice::LotFull`] if every slot is taken
    pub fn park(
        &mut self,
        registration: impl Into<String>,
        colour: impl Into<String>,
    ) -> Outcome<SlotNumber> {
        if !self.is_created() {
            return Err(Notice::LotNotCreated);
        }

        let index = self
            .slots
            .iter()
            .position(Slot::is_empty)
            .ok_or(Notice::LotFull)?;

        let vehicle = Vehicle::new(registration, colour);
        log::debug!("parking {vehicle} in slot {}", index + 1);
        self.slots[index] = Slot::Occupied(vehicle);
        Ok(SlotNumber::from_index(index))
    }

    /// Frees the given 1-based slot.
    ///
    /// # Errors
    ///
    /// - [`Notice::LotNotCreated`] if the lot has no slots
    /// - [`Notice::SlotNotAvailable`] if `slot` is not within `1..=capacity`
    /// - [`Notice::SlotAlreadyFree`] if nothing is parked there
    pub fn leave(&mut self, slot: i64) -> Outcome<SlotNumber> {
        if !self.is_created() {
            return Err(Notice::LotNotCreated);
        }

        let number = SlotNumber::try_from(slot).map_err(|_| Notice::SlotNotAvailable)?;
        let contents = self
            .slots
            .get_mut(number.index())
            .ok_or(Notice::SlotNotAvailable)?;

        let vehicle = contents.take().ok_or(Notice::SlotAlreadyFree)?;
        log::debug!("{vehicle} left slot {number}");
        Ok(number)
    }

    /// Reports the lot-state notice that precedes every query, if any.
    fn check_queryable(&self) -> Outcome<()> {
        if !self.is_created() {
            Err(Notice::LotNotCreated)
        } else if self.is_empty() {
            Err(Notice::LotEmpty)
        } else {
            Ok(())
        }
    }
}
