use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::Flight;
use crate::error::AppError;

/// Fare tier a seat is booked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingClass {
    #[default]
    Economy,
    Business,
    First,
}

impl BookingClass {
    pub const ALL: [BookingClass; 3] = [
        BookingClass::Economy,
        BookingClass::Business,
        BookingClass::First,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingClass::Economy => "economy",
            BookingClass::Business => "business",
            BookingClass::First => "first",
        }
    }

    /// Base fare multiplier for the class
    pub fn fare_multiplier(&self) -> f64 {
        match self {
            BookingClass::Economy => 1.0,
            BookingClass::Business => 1.5,
            BookingClass::First => 2.0,
        }
    }

    /// Column holding the per-class seat count in the `flights` table
    pub fn availability_column(&self) -> &'static str {
        match self {
            BookingClass::Economy => "economy_availability",
            BookingClass::Business => "business_availability",
            BookingClass::First => "first_availability",
        }
    }

    /// Seats still open in this class on the given flight
    pub fn available_seats(&self, flight: &Flight) -> i32 {
        match self {
            BookingClass::Economy => flight.economy_availability,
            BookingClass::Business => flight.business_availability,
            BookingClass::First => flight.first_availability,
        }
    }
}

impl Display for BookingClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingClass {
    type Err = AppError;

    /// Exact match only: "Economy" or "FIRST" are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| AppError::InvalidArgument(format!("Invalid booking class: {}", s)))
    }
}
