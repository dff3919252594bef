use chrono::{Datelike, NaiveDate};

use crate::models::{BookingClass, Flight, FlightStatus, UserPreferences};

/// Structured predicate over stored flights
///
/// Stores translate this into their own query language, binding every value
/// as a parameter. [`FlightFilter::matches`] is the reference semantics every
/// store has to agree with.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightFilter {
    pub status: FlightStatus,
    pub departure_airport: String,
    pub arrival_airport: Option<String>,
    /// Same-day match on the departure timestamp
    pub departure_date: Option<NaiveDate>,
    /// Month-of-year match (1-12) on the departure timestamp, any year
    pub departure_month: Option<u32>,
    pub min_availability: Option<i32>,
    pub min_class_availability: Option<(BookingClass, i32)>,
    pub max_base_cost: Option<f64>,
}

impl FlightFilter {
    fn base(status: FlightStatus, departure_airport: &str) -> Self {
        Self {
            status,
            departure_airport: departure_airport.to_string(),
            arrival_airport: None,
            departure_date: None,
            departure_month: None,
            min_availability: None,
            min_class_availability: None,
            max_base_cost: None,
        }
    }

    /// Upcoming flights that satisfy the traveler's preferences
    pub fn candidates(prefs: &UserPreferences) -> Self {
        let seats = i32::try_from(prefs.party_size).unwrap_or(i32::MAX);

        Self {
            arrival_airport: prefs.destination.clone(),
            departure_date: prefs.departure_date,
            min_availability: Some(seats),
            min_class_availability: Some((prefs.booking_class, seats)),
            max_base_cost: prefs.budget,
            ..Self::base(FlightStatus::Upcoming, &prefs.origin)
        }
    }

    /// Completed flights out of `origin` that departed in `month` of any year
    pub fn historical(origin: &str, month: u32) -> Self {
        Self {
            departure_month: Some(month),
            ..Self::base(FlightStatus::Completed, origin)
        }
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        if flight.flight_status != self.status || flight.departure_airport != self.departure_airport
        {
            return false;
        }

        if let Some(arrival) = &self.arrival_airport {
            if &flight.arrival_airport != arrival {
                return false;
            }
        }

        if let Some(date) = self.departure_date {
            if flight.departure_datetime.date() != date {
                return false;
            }
        }

        if let Some(month) = self.departure_month {
            if flight.departure_datetime.month() != month {
                return false;
            }
        }

        if let Some(seats) = self.min_availability {
            if flight.availability < seats {
                return false;
            }
        }

        if let Some((class, seats)) = self.min_class_availability {
            if class.available_seats(flight) < seats {
                return false;
            }
        }

        if let Some(budget) = self.max_base_cost {
            if flight.base_cost > budget {
                return false;
            }
        }

        true
    }
}
