//! Vehicle type and case-insensitive matching helpers.

use std::fmt;

/// A vehicle occupying a slot: a registration number and a colour.
///
/// Identity is case-sensitive (`PartialEq` compares both fields exactly),
/// while lookups through [`Vehicle::has_colour`] and
/// [`Vehicle::has_registration`] ignore case.
///
/// # Examples
///
/// ```
/// use carpark::Vehicle;
///
/// let car = Vehicle::new("KA-01-HH-1234", "White");
/// assert_eq!(car.registration(), "KA-01-HH-1234");
/// assert!(car.has_colour("white"));
/// assert_ne!(car, Vehicle::new("ka-01-hh-1234", "White"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    registration: String,
    colour: String,
}

impl Vehicle {
    /// Creates a vehicle. No format checks are applied to either field.
    #[must_use]
    pub fn new(registration: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
            colour: colour.into(),
        }
    }

    /// Returns the registration number as given at park time.
    #[must_use]
    pub fn registration(&self) -> &str {
        &self.registration
    }

    /// Returns the colour as given at park time.
    #[must_use]
    pub fn colour(&self) -> &str {
        &self.colour
    }

    /// Returns `true` if the colour matches, ignoring case.
    #[must_use]
    pub fn has_colour(&self, colour: &str) -> bool {
        eq_ignore_case(&self.colour, colour)
    }

    /// Returns `true` if the registration number matches, ignoring case.
    #[must_use]
    pub fn has_registration(&self, registration: &str) -> bool {
        eq_ignore_case(&self.registration, registration)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.registration, self.colour)
    }
}

/// Compares two strings after lowercasing every character.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
