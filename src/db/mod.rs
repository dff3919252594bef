pub mod filter;
pub mod memory;
pub mod postgres;
pub mod store;

pub use filter::FlightFilter;
pub use memory::InMemoryFlightStore;
pub use postgres::{create_pool, run_migrations, PgFlightStore};
pub use store::FlightStore;

#[cfg(test)]
pub use store::MockFlightStore;
