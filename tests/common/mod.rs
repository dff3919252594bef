use chrono::NaiveDateTime;

use flight_advisor::models::{Flight, FlightStatus};

pub fn at(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M").unwrap()
}

pub fn upcoming(id: i64, from: &str, to: &str, departure: &str) -> Flight {
    Flight {
        flight_id: id,
        flight_number: format!("FA{}", id),
        departure_airport: from.to_string(),
        arrival_airport: to.to_string(),
        departure_datetime: at(departure),
        flight_status: FlightStatus::Upcoming,
        capacity: 100,
        tickets_sold: 50,
        availability: 50,
        economy_availability: 30,
        business_availability: 15,
        first_availability: 5,
        base_cost: 200.0,
        points_bonus_multiplier: None,
    }
}

pub fn completed(id: i64, from: &str, to: &str, departure: &str, tickets_sold: i32) -> Flight {
    Flight {
        flight_status: FlightStatus::Completed,
        tickets_sold,
        availability: 100 - tickets_sold,
        ..upcoming(id, from, to, departure)
    }
}

/// A small JFK-centred timetable with June history for LAX and MIA
#[allow(dead_code)]
pub fn timetable() -> Vec<Flight> {
    vec![
        upcoming(1, "JFK", "SFO", "2024-06-10 08:00"),
        upcoming(2, "JFK", "LAX", "2024-06-10 09:00"),
        upcoming(3, "JFK", "MIA", "2024-06-11 07:30"),
        upcoming(4, "JFK", "LAX", "2024-06-12 18:45"),
        upcoming(5, "BOS", "LAX", "2024-06-10 09:00"),
        Flight {
            economy_availability: 0,
            ..upcoming(6, "JFK", "LAX", "2024-06-13 10:00")
        },
        Flight {
            base_cost: 900.0,
            ..upcoming(7, "JFK", "MIA", "2024-06-14 10:00")
        },
        completed(100, "JFK", "LAX", "2023-06-03 08:00", 120),
        completed(101, "JFK", "LAX", "2021-06-28 08:00", 80),
        completed(102, "JFK", "MIA", "2023-06-09 08:00", 30),
        completed(103, "JFK", "SFO", "2023-07-01 08:00", 500),
        completed(104, "BOS", "SFO", "2023-06-01 08:00", 500),
    ]
}
