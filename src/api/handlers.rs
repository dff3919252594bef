use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{is_loyalty_id, FareQuote, RecommendationEntry, UserPreferences};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub preferences: UserPreferences,
    pub num_results: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct FareQuery {
    pub booking_class: String,
    pub loyalty_id: Option<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Ranked flight recommendations for the posted preferences
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<Vec<RecommendationEntry>>> {
    let Json(request) = payload?;
    let num_results = request
        .num_results
        .unwrap_or_else(|| state.recommender.default_num_results());

    tracing::info!(
        origin = %request.preferences.origin,
        destination = ?request.preferences.destination,
        booking_class = %request.preferences.booking_class,
        num_results,
        "Processing recommendation request"
    );

    let entries = state
        .recommender
        .recommend(&request.preferences, num_results)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Recommendation request failed");
            e
        })?;

    tracing::info!(returned = entries.len(), "Recommendation completed");

    Ok(Json(entries))
}

/// Adjusted fare for one flight and booking class
pub async fn fare(
    State(state): State<Arc<AppState>>,
    Path(flight_id): Path<String>,
    query: Result<Query<FareQuery>, QueryRejection>,
) -> AppResult<Json<FareQuote>> {
    let Query(query) = query?;
    let is_loyalty_member = is_loyalty_id(query.loyalty_id.as_deref());

    tracing::info!(
        flight_id = %flight_id,
        booking_class = %query.booking_class,
        is_loyalty_member,
        "Processing fare request"
    );

    let quote = state
        .fares
        .quote(&flight_id, &query.booking_class, is_loyalty_member)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, flight_id = %flight_id, "Fare request failed");
            e
        })?;

    Ok(Json(quote))
}
