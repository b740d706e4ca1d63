use crate::UserProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A support ticket holding the user's request verbatim. Write-once:
/// never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub user_request: String,
    pub user_profile: UserProfile,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn new(ticket_id: String, user_request: String, user_profile: UserProfile) -> Self {
        Self {
            ticket_id,
            user_request,
            user_profile,
            created_at: Utc::now(),
        }
    }
}
