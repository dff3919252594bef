use chrono::{Datelike, Local, NaiveDate};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    db::{FlightFilter, FlightStore},
    error::AppResult,
    models::{Flight, RecommendationEntry, UserPreferences},
};

/// Number of recommendations returned when the caller doesn't ask for a count
pub const DEFAULT_NUM_RESULTS: usize = 15;

/// Ranks upcoming flights by the historical popularity of their destination
///
/// Each request runs two storage round trips in order: the candidate fetch,
/// then the historical fetch used for scoring. Nothing is shared between
/// requests.
#[derive(Clone)]
pub struct FlightRecommender {
    store: Arc<dyn FlightStore>,
    default_num_results: usize,
}

impl FlightRecommender {
    pub fn new(store: Arc<dyn FlightStore>) -> Self {
        Self {
            store,
            default_num_results: DEFAULT_NUM_RESULTS,
        }
    }

    pub fn with_default_num_results(mut self, num_results: usize) -> Self {
        self.default_num_results = num_results;
        self
    }

    pub fn default_num_results(&self) -> usize {
        self.default_num_results
    }

    /// Top recommendations using the configured result count
    pub async fn get_recommended_flights(
        &self,
        prefs: &UserPreferences,
    ) -> AppResult<Vec<RecommendationEntry>> {
        self.recommend(prefs, self.default_num_results).await
    }

    pub async fn recommend(
        &self,
        prefs: &UserPreferences,
        num_results: usize,
    ) -> AppResult<Vec<RecommendationEntry>> {
        self.recommend_as_of(prefs, num_results, Local::now().date_naive())
            .await
    }

    /// Same as [`recommend`](Self::recommend) with "today" pinned, which
    /// decides the scoring month when no departure date is given
    pub async fn recommend_as_of(
        &self,
        prefs: &UserPreferences,
        num_results: usize,
        today: NaiveDate,
    ) -> AppResult<Vec<RecommendationEntry>> {
        let prefs = prefs.clone().validated()?;

        let candidates = self
            .store
            .fetch_flights(&FlightFilter::candidates(&prefs))
            .await?;
        let mut entries = into_entries(candidates);

        let month = target_month(&prefs, today);
        let history = self
            .store
            .fetch_flights(&FlightFilter::historical(&prefs.origin, month))
            .await?;

        score_by_popularity(&mut entries, &popularity_by_destination(&history));

        Ok(rank(entries, num_results))
    }
}

/// Month scored against: the departure date's month, or the current one
pub fn target_month(prefs: &UserPreferences, today: NaiveDate) -> u32 {
    prefs.departure_date.unwrap_or(today).month()
}

/// One zero-scored entry per distinct flight, in fetch order
fn into_entries(flights: Vec<Flight>) -> Vec<RecommendationEntry> {
    let mut seen = HashSet::new();
    flights
        .into_iter()
        .filter(|f| seen.insert(f.flight_id))
        .map(RecommendationEntry::new)
        .collect()
}

/// Total tickets sold per arrival airport
pub fn popularity_by_destination(history: &[Flight]) -> HashMap<String, u64> {
    let mut totals: HashMap<String, u64> = HashMap::new();
    for flight in history {
        let sold = u64::try_from(flight.tickets_sold).unwrap_or(0);
        *totals.entry(flight.arrival_airport.clone()).or_default() += sold;
    }
    totals
}

pub fn score_by_popularity(entries: &mut [RecommendationEntry], popularity: &HashMap<String, u64>) {
    for entry in entries.iter_mut() {
        if let Some(total) = popularity.get(&entry.flight.arrival_airport) {
            entry.score += total;
        }
    }
}

/// Highest score first; equal scores fall back to ascending flight id
pub fn rank(mut entries: Vec<RecommendationEntry>, num_results: usize) -> Vec<RecommendationEntry> {
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.flight.flight_id.cmp(&b.flight.flight_id))
    });
    entries.truncate(num_results);
    entries
}
