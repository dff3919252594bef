use tokio::sync::RwLock;

use super::{FlightFilter, FlightStore};
use crate::{error::AppResult, models::Flight};

/// Flight store held entirely in memory
///
/// Evaluates filters with [`FlightFilter::matches`]. Useful for local runs
/// and tests where no database is available.
#[derive(Default)]
pub struct InMemoryFlightStore {
    flights: RwLock<Vec<Flight>>,
}

impl InMemoryFlightStore {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self {
            flights: RwLock::new(flights),
        }
    }

    /// Adds a flight, replacing any stored flight with the same identifier
    pub async fn insert(&self, flight: Flight) {
        let mut flights = self.flights.write().await;
        flights.retain(|f| f.flight_id != flight.flight_id);
        flights.push(flight);
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.flights.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.flights.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl FlightStore for InMemoryFlightStore {
    async fn fetch_flight(&self, flight_id: i64) -> AppResult<Option<Flight>> {
        let flights = self.flights.read().await;
        Ok(flights.iter().find(|f| f.flight_id == flight_id).cloned())
    }

    async fn fetch_flights(&self, filter: &FlightFilter) -> AppResult<Vec<Flight>> {
        let flights = self.flights.read().await;
        let mut matching: Vec<Flight> = flights
            .iter()
            .filter(|f| filter.matches(f))
            .cloned()
            .collect();
        matching.sort_by_key(|f| f.flight_id);
        Ok(matching)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::flight;
    use crate::models::UserPreferences;

    #[tokio::test]
    async fn test_fetch_flight_by_id() {
        let store = InMemoryFlightStore::new(vec![flight(7, "JFK", "LAX", "2024-06-01 09:00")]);

        let found = store.fetch_flight(7).await.unwrap();
        assert_eq!(found.map(|f| f.flight_id), Some(7));
        assert!(store.fetch_flight(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_flights_ordered_by_id() {
        let store = InMemoryFlightStore::new(vec![
            flight(3, "JFK", "LAX", "2024-06-01 09:00"),
            flight(1, "JFK", "SFO", "2024-06-01 09:00"),
            flight(2, "BOS", "SFO", "2024-06-01 09:00"),
        ]);

        let filter = FlightFilter::candidates(&UserPreferences::new("JFK"));
        let ids: Vec<i64> = store
            .fetch_flights(&filter)
            .await
            .unwrap()
            .iter()
            .map(|f| f.flight_id)
            .collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_insert_replaces_same_id() {
        let store = InMemoryFlightStore::default();
        assert!(store.is_empty().await);

        store.insert(flight(1, "JFK", "LAX", "2024-06-01 09:00")).await;
        store.insert(flight(1, "JFK", "SFO", "2024-06-01 09:00")).await;

        assert_eq!(store.len().await, 1);
        let stored = store.fetch_flight(1).await.unwrap().unwrap();
        assert_eq!(stored.arrival_airport, "SFO");
    }
}
