use std::sync::Arc;

use crate::db::FlightStore;
use crate::services::{FareService, FlightRecommender};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: FlightRecommender,
    pub fares: FareService,
}

impl AppState {
    /// Builds both services on top of one flight store
    pub fn new(store: Arc<dyn FlightStore>, default_num_results: usize) -> Self {
        tracing::info!(
            store = store.name(),
            default_num_results,
            "Initializing application state"
        );

        Self {
            recommender: FlightRecommender::new(store.clone())
                .with_default_num_results(default_num_results),
            fares: FareService::new(store),
        }
    }
}
