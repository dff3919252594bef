use serde::{Deserialize, Serialize};

use super::{BookingClass, Flight};

/// A candidate flight paired with its popularity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub flight: Flight,
    pub score: u64,
}

impl RecommendationEntry {
    pub fn new(flight: Flight) -> Self {
        Self { flight, score: 0 }
    }
}

/// Priced fare for one flight and booking class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub flight_id: i64,
    pub booking_class: BookingClass,
    pub loyalty_pricing: bool,
    /// Same currency unit as the flight's base cost, unrounded
    pub fare: f64,
}
