use serde::{Deserialize, Serialize};
use std::fmt;

/// A plain calendar date, no timezone. Fields are not range-checked: an
/// out-of-range month or day simply never matches a seeded flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_display() {
        assert_eq!(Date::new(2025, 9, 1).to_string(), "2025-09-01");
    }

    #[test]
    fn test_date_deserialization() {
        let json = r#"{ "year": 2025, "month": 10, "day": 1 }"#;
        let date: Date = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(date, Date::new(2025, 10, 1));
    }
}
