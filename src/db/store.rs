use crate::{error::AppResult, models::Flight};

use super::FlightFilter;

/// Read access to stored flights
///
/// Implementations must bind every externally supplied value as a query
/// parameter and surface their own failures as `AppError::Storage`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FlightStore: Send + Sync {
    /// Looks up a single flight by identifier
    async fn fetch_flight(&self, flight_id: i64) -> AppResult<Option<Flight>>;

    /// Returns every flight matching the filter, ordered by flight identifier
    async fn fetch_flights(&self, filter: &FlightFilter) -> AppResult<Vec<Flight>>;

    /// Store name for logging and debugging
    fn name(&self) -> &'static str;
}
