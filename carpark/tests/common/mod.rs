//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for testing the carpark library.

use carpark::{Dispatcher, ParkingLot};

/// Builder for creating test lots with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::LotFixture;
/// let lot = LotFixture::new()
///     .with_capacity(3)
///     .with_vehicle("KA-01-HH-1234", "White")
///     .build();
/// ```
#[allow(dead_code)]
pub struct LotFixture {
    capacity: i64,
    vehicles: Vec<(String, String)>,
    departures: Vec<i64>,
}

#[allow(dead_code)]
impl LotFixture {
    /// Creates a fixture for a six-slot lot with nothing parked.
    pub fn new() -> Self {
        Self {
            capacity: 6,
            vehicles: Vec::new(),
            departures: Vec::new(),
        }
    }

    /// Sets the number of slots.
    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Parks a vehicle (in the order given) when the lot is built.
    pub fn with_vehicle(mut self, registration: &str, colour: &str) -> Self {
        self.vehicles
            .push((registration.to_string(), colour.to_string()));
        self
    }

    /// Frees a slot after every vehicle has been parked.
    pub fn with_departure(mut self, slot: i64) -> Self {
        self.departures.push(slot);
        self
    }

    /// Builds the lot.
    ///
    /// # Panics
    /// Panics if the fixture describes an impossible lot.
    pub fn build(self) -> ParkingLot {
        let mut lot = ParkingLot::new();
        lot.create(self.capacity).expect("fixture capacity must be positive");
        for (registration, colour) in self.vehicles {
            lot.park(registration, colour).expect("fixture lot is full");
        }
        for slot in self.departures {
            lot.leave(slot).expect("fixture departure must free a slot");
        }
        lot
    }

    /// Builds a dispatcher over the lot.
    pub fn dispatcher(self) -> Dispatcher {
        Dispatcher::with_lot(self.build())
    }
}

/// The three vehicles used throughout the sample sessions.
#[allow(dead_code)]
pub fn sample_lot() -> LotFixture {
    LotFixture::new()
        .with_capacity(3)
        .with_vehicle("KA-01-HH-1234", "White")
        .with_vehicle("KA-01-HH-9999", "White")
        .with_vehicle("KA-01-BB-0001", "Black")
}

/// Runs `lines` through `dispatcher` and returns everything written.
#[allow(dead_code)]
pub fn run_lines(dispatcher: &mut Dispatcher, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
        dispatcher
            .dispatch(line, &mut out)
            .expect("writing to a Vec cannot fail");
    }
    String::from_utf8(out).expect("responses are UTF-8")
}
