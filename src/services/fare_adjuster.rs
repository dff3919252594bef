//! Demand-adjusted fare pricing.
//!
//! The fare for a seat is the flight's base cost scaled by the booking class
//! multiplier, a demand multiplier derived from how much of the flight has
//! sold, and for loyalty members on promoted flights, a loyalty discount.
//! All multipliers compose by multiplication.

use crate::models::{BookingClass, Flight};

/// Sold share (percent) under which a flight counts as low demand
pub const LOW_DEMAND_MAX_PCT: f64 = 20.0;
pub const LOW_DEMAND_MULTIPLIER: f64 = 0.75;

/// Sold share (percent) above which a flight counts as high demand
pub const HIGH_DEMAND_MIN_PCT: f64 = 80.0;
pub const HIGH_DEMAND_MULTIPLIER: f64 = 1.25;

/// Discount for loyalty members on flights with a bonus-points promotion
pub const LOYALTY_PROMOTION_MULTIPLIER: f64 = 0.8;

/// True iff `booking_class` names one of the known classes, case-sensitive
pub fn is_valid_class(booking_class: &str) -> bool {
    booking_class.parse::<BookingClass>().is_ok()
}

/// Multiplier for the flight's current demand
///
/// Both thresholds are exclusive, so exactly 20% or 80% sold is neutral.
/// A flight without positive capacity is priced as neutral.
pub fn demand_multiplier(flight: &Flight) -> f64 {
    match flight.sold_percentage() {
        Some(pct) if pct < LOW_DEMAND_MAX_PCT => LOW_DEMAND_MULTIPLIER,
        Some(pct) if pct > HIGH_DEMAND_MIN_PCT => HIGH_DEMAND_MULTIPLIER,
        _ => 1.0,
    }
}

pub fn loyalty_multiplier(flight: &Flight, is_loyalty_member: bool) -> f64 {
    if is_loyalty_member && flight.has_points_promotion() {
        LOYALTY_PROMOTION_MULTIPLIER
    } else {
        1.0
    }
}

/// Computes the adjusted fare for one seat
///
/// No rounding is applied; the result is in the same unit as `base_cost`.
pub fn adjust_fare(flight: &Flight, booking_class: BookingClass, is_loyalty_member: bool) -> f64 {
    // TODO: add a historical-popularity multiplier once per-flight popularity is stored
    let adjustment = demand_multiplier(flight) * loyalty_multiplier(flight, is_loyalty_member);

    flight.base_cost * booking_class.fare_multiplier() * adjustment
}
