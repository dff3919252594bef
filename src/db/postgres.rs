use sqlx::{postgres::PgPoolOptions, PgPool, Postgres, QueryBuilder};

use super::{FlightFilter, FlightStore};
use crate::{error::AppResult, models::Flight};

const FLIGHT_COLUMNS: &str = "flight_id, flight_number, departure_airport, arrival_airport, \
     departure_datetime, flight_status, capacity, tickets_sold, availability, \
     economy_availability, business_availability, first_availability, base_cost, \
     points_bonus_multiplier";

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Applies the bundled migrations
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations completed");
    Ok(())
}

/// Flight store backed by the `flights` table
#[derive(Clone)]
pub struct PgFlightStore {
    pool: PgPool,
}

impl PgFlightStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Translates a filter into a parameter-bound SELECT
    fn build_query(filter: &FlightFilter) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!("SELECT {} FROM flights WHERE ", FLIGHT_COLUMNS));

        query
            .push("flight_status = ")
            .push_bind(filter.status.as_str().to_string())
            .push(" AND departure_airport = ")
            .push_bind(filter.departure_airport.clone());

        if let Some(arrival) = &filter.arrival_airport {
            query.push(" AND arrival_airport = ").push_bind(arrival.clone());
        }

        if let Some(date) = filter.departure_date {
            query.push(" AND DATE(departure_datetime) = ").push_bind(date);
        }

        if let Some(month) = filter.departure_month {
            query
                .push(" AND EXTRACT(MONTH FROM departure_datetime)::INT = ")
                .push_bind(month as i32);
        }

        if let Some(seats) = filter.min_availability {
            query.push(" AND availability >= ").push_bind(seats);
        }

        // Column names come from a fixed table, only the seat count is bound
        if let Some((class, seats)) = filter.min_class_availability {
            query
                .push(" AND ")
                .push(class.availability_column())
                .push(" >= ")
                .push_bind(seats);
        }

        if let Some(budget) = filter.max_base_cost {
            query.push(" AND base_cost <= ").push_bind(budget);
        }

        query.push(" ORDER BY flight_id");
        query
    }
}

#[async_trait::async_trait]
impl FlightStore for PgFlightStore {
    async fn fetch_flight(&self, flight_id: i64) -> AppResult<Option<Flight>> {
        let sql = format!("SELECT {} FROM flights WHERE flight_id = $1", FLIGHT_COLUMNS);

        let flight = sqlx::query_as::<_, Flight>(&sql)
            .bind(flight_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, flight_id, "Flight lookup failed");
                e
            })?;

        tracing::debug!(flight_id, found = flight.is_some(), "Flight lookup");

        Ok(flight)
    }

    async fn fetch_flights(&self, filter: &FlightFilter) -> AppResult<Vec<Flight>> {
        let mut query = Self::build_query(filter);

        let flights = query
            .build_query_as::<Flight>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, status = %filter.status, "Flight query failed");
                e
            })?;

        tracing::debug!(
            status = %filter.status,
            origin = %filter.departure_airport,
            rows = flights.len(),
            "Fetched flights"
        );

        Ok(flights)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
