use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::BookingClass;
use crate::error::{AppError, AppResult};

/// Traveler preferences driving flight recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    /// IATA code of the departure airport
    pub origin: String,
    /// IATA code of the arrival airport, any destination when absent
    #[serde(default)]
    pub destination: Option<String>,
    /// Calendar day of departure, time of day is ignored
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub booking_class: BookingClass,
    #[serde(default = "default_party_size")]
    pub party_size: u32,
    /// Highest acceptable base cost
    #[serde(default)]
    pub budget: Option<f64>,
    /// Loyalty program membership identifier
    #[serde(default)]
    pub loyalty_id: Option<String>,
}

fn default_party_size() -> u32 {
    1
}

impl UserPreferences {
    /// Creates preferences for a single economy traveler leaving from `origin`
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: None,
            departure_date: None,
            booking_class: BookingClass::default(),
            party_size: default_party_size(),
            budget: None,
            loyalty_id: None,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_departure_date(mut self, date: NaiveDate) -> Self {
        self.departure_date = Some(date);
        self
    }

    pub fn with_booking_class(mut self, booking_class: BookingClass) -> Self {
        self.booking_class = booking_class;
        self
    }

    pub fn with_party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_loyalty_id(mut self, loyalty_id: impl Into<String>) -> Self {
        self.loyalty_id = Some(loyalty_id.into());
        self
    }

    /// Checks the preferences and normalizes airport codes to upper case
    pub fn validated(mut self) -> AppResult<Self> {
        self.origin = normalize_airport_code("origin", &self.origin)?;
        self.destination = self
            .destination
            .as_deref()
            .map(|code| normalize_airport_code("destination", code))
            .transpose()?;

        if self.party_size == 0 {
            return Err(AppError::InvalidArgument(
                "party_size must be at least 1".to_string(),
            ));
        }

        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget <= 0.0 {
                return Err(AppError::InvalidArgument(format!(
                    "budget must be a positive amount, got {}",
                    budget
                )));
            }
        }

        Ok(self)
    }
}

/// A loyalty id counts as membership unless it is missing or blank
pub fn is_loyalty_id(loyalty_id: Option<&str>) -> bool {
    loyalty_id.is_some_and(|id| !id.trim().is_empty())
}

fn normalize_airport_code(field: &str, code: &str) -> AppResult<String> {
    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::InvalidArgument(format!(
            "{} must be a 3-letter airport code, got '{}'",
            field, code
        )));
    }
    Ok(code.to_ascii_uppercase())
}
