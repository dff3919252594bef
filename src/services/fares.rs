use std::sync::Arc;

use crate::{
    db::FlightStore,
    error::{AppError, AppResult},
    models::{BookingClass, FareQuote},
    services::fare_adjuster,
};

/// Prices a stored flight for a booking class
///
/// Inputs are validated before storage is touched, and the first failure
/// ends the request.
#[derive(Clone)]
pub struct FareService {
    store: Arc<dyn FlightStore>,
}

impl FareService {
    pub fn new(store: Arc<dyn FlightStore>) -> Self {
        Self { store }
    }

    /// Fare for a non-member
    pub async fn get_fare(&self, flight_id: &str, booking_class: &str) -> AppResult<f64> {
        self.get_fare_for(flight_id, booking_class, false).await
    }

    pub async fn get_fare_for(
        &self,
        flight_id: &str,
        booking_class: &str,
        is_loyalty_member: bool,
    ) -> AppResult<f64> {
        let quote = self
            .quote(flight_id, booking_class, is_loyalty_member)
            .await?;
        Ok(quote.fare)
    }

    pub async fn quote(
        &self,
        flight_id: &str,
        booking_class: &str,
        is_loyalty_member: bool,
    ) -> AppResult<FareQuote> {
        let booking_class: BookingClass = booking_class.parse()?;
        let flight_id = parse_flight_id(flight_id)?;

        let flight = self
            .store
            .fetch_flight(flight_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Flight with id={} not found", flight_id)))?;

        Ok(FareQuote {
            flight_id,
            booking_class,
            loyalty_pricing: is_loyalty_member,
            fare: fare_adjuster::adjust_fare(&flight, booking_class, is_loyalty_member),
        })
    }
}

fn parse_flight_id(raw: &str) -> AppResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => Err(AppError::InvalidArgument(format!(
            "flight_id={} is not a valid number",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{test_support::flight, MockFlightStore};
    use crate::models::Flight;
    use tokio_test::{assert_err, assert_ok};

    fn flight_selling(id: i64, tickets_sold: i32) -> Flight {
        Flight {
            tickets_sold,
            ..flight(id, "JFK", "LAX", "2024-06-01 09:00")
        }
    }

    /// Store mirroring a small fixture table keyed by flight id
    fn fixture_store() -> MockFlightStore {
        let mut store = MockFlightStore::new();
        store.expect_fetch_flight().returning(|id| match id {
            200 => Ok(Some(flight_selling(200, 50))),
            205 => Ok(Some(flight_selling(205, 5))),
            285 => Ok(Some(flight_selling(285, 85))),
            404 => Ok(None),
            500 => Err(AppError::storage("Internal Server Error")),
            other => Err(AppError::storage(format!("unexpected call with flight_id={}", other))),
        });
        store
    }

    fn service(store: MockFlightStore) -> FareService {
        FareService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_fares_by_class() {
        let service = service(fixture_store());
        assert_eq!(assert_ok!(service.get_fare("200", "economy").await), 200.0);
        assert_eq!(assert_ok!(service.get_fare("200", "business").await), 300.0);
        assert_eq!(assert_ok!(service.get_fare("200", "first").await), 400.0);
    }

    #[tokio::test]
    async fn test_fares_by_demand() {
        let service = service(fixture_store());
        assert_eq!(assert_ok!(service.get_fare("205", "economy").await), 150.0);
        assert_eq!(assert_ok!(service.get_fare("285", "economy").await), 250.0);
    }

    #[tokio::test]
    async fn test_unknown_flight_is_not_found() {
        let service = service(fixture_store());
        let err = assert_err!(service.get_fare("404", "economy").await);
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("Flight with id=404 not found"));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let service = service(fixture_store());
        let err = assert_err!(service.get_fare("500", "economy").await);
        assert!(matches!(err, AppError::Storage(_)));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_storage() {
        let mut store = MockFlightStore::new();
        store.expect_fetch_flight().times(0);
        let service = service(store);

        for (flight_id, class) in [
            ("200", "couch"),
            ("200", "Economy"),
            ("abc", "economy"),
            ("12x", "economy"),
            ("-1", "economy"),
            ("", "economy"),
        ] {
            let err = assert_err!(service.get_fare(flight_id, class).await);
            assert!(matches!(err, AppError::InvalidArgument(_)), "{flight_id}/{class}");
        }
    }

    #[tokio::test]
    async fn test_invalid_class_reported_before_invalid_id() {
        let mut store = MockFlightStore::new();
        store.expect_fetch_flight().times(0);
        let service = service(store);

        let err = assert_err!(service.get_fare("abc", "couch").await);
        assert!(err.to_string().contains("booking class"));
    }

    #[tokio::test]
    async fn test_quote_with_loyalty_pricing() {
        let mut store = MockFlightStore::new();
        store
            .expect_fetch_flight()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|id| {
                Ok(Some(Flight {
                    points_bonus_multiplier: Some(2.0),
                    ..flight_selling(id, 50)
                }))
            });
        let service = service(store);

        let quote = assert_ok!(service.quote("42", "first", true).await);
        assert_eq!(quote.flight_id, 42);
        assert_eq!(quote.booking_class, BookingClass::First);
        assert!(quote.loyalty_pricing);
        assert!((quote.fare - 320.0).abs() < 1e-9);
    }
}
