pub mod fare_adjuster;
pub mod fares;
pub mod recommender;

pub use fares::FareService;
pub use recommender::FlightRecommender;
