use crate::date::Date;
use serde::{Deserialize, Serialize};

/// Departure slot of a flight. Searches match on the calendar fields
/// only; the hour is display detail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl FlightDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Does this departure fall on the given calendar date?
    pub fn on_date(&self, date: &Date) -> bool {
        self.year == date.year && self.month == date.month && self.day == date.day
    }
}

/// A scheduled flight. Seeded once at startup and never mutated;
/// booking does not decrement `available_seats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: String,
    pub origin: String,
    pub destination: String,
    pub date_time: FlightDateTime,
    /// Flight time in hours.
    pub duration: f64,
    /// Fare in currency units.
    pub price: f64,
    pub available_seats: u32,
}
