use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lifecycle state of a flight as stored
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlightStatus {
    Upcoming,
    Completed,
    Cancelled,
    /// Any status value the service doesn't act on
    Other(String),
}

impl FlightStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FlightStatus::Upcoming => "upcoming",
            FlightStatus::Completed => "completed",
            FlightStatus::Cancelled => "cancelled",
            FlightStatus::Other(status) => status,
        }
    }
}

impl From<String> for FlightStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "upcoming" => FlightStatus::Upcoming,
            "completed" => FlightStatus::Completed,
            "cancelled" => FlightStatus::Cancelled,
            _ => FlightStatus::Other(value),
        }
    }
}

impl From<FlightStatus> for String {
    fn from(status: FlightStatus) -> Self {
        match status {
            FlightStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot of a row in the `flights` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Flight {
    pub flight_id: i64,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_datetime: NaiveDateTime,
    #[sqlx(try_from = "String")]
    pub flight_status: FlightStatus,
    /// Total seats; must be positive for demand pricing
    pub capacity: i32,
    pub tickets_sold: i32,
    /// Seats still open across all classes
    pub availability: i32,
    pub economy_availability: i32,
    pub business_availability: i32,
    pub first_availability: i32,
    pub base_cost: f64,
    /// Set when the flight runs a bonus-points promotion
    pub points_bonus_multiplier: Option<f64>,
}

impl Flight {
    /// Share of capacity already sold, in percent
    ///
    /// Returns `None` when capacity isn't positive.
    pub fn sold_percentage(&self) -> Option<f64> {
        if self.capacity <= 0 {
            return None;
        }
        Some(self.tickets_sold as f64 * 100.0 / self.capacity as f64)
    }

    /// True when a positive bonus-points promotion is attached
    pub fn has_points_promotion(&self) -> bool {
        self.points_bonus_multiplier.is_some_and(|m| m > 0.0)
    }
}
