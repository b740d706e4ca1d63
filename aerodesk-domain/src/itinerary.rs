use crate::{Flight, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The record linking a user to a booked flight, keyed by its generated
/// confirmation number. Exists exactly between booking and cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub confirmation_number: String,
    pub user_profile: UserProfile,
    pub flight: Flight,
    pub created_at: DateTime<Utc>,
}

impl Itinerary {
    pub fn new(confirmation_number: String, user_profile: UserProfile, flight: Flight) -> Self {
        Self {
            confirmation_number,
            user_profile,
            flight,
            created_at: Utc::now(),
        }
    }
}
