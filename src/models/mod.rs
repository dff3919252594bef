mod booking_class;
mod flight;
mod recommendation;
mod user_preferences;

pub use booking_class::BookingClass;
pub use flight::{Flight, FlightStatus};
pub use recommendation::{FareQuote, RecommendationEntry};
pub use user_preferences::{is_loyalty_id, UserPreferences};
