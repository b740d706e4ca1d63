pub mod booking;
pub mod reference;
pub mod repository;
pub mod search;
pub mod support;

use aerodesk_domain::Date;

/// Failures raised to the calling agent loop. Expected-absence lookups
/// (unknown user, unknown itinerary) return `Option` instead and never
/// appear here.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("no matching flight from {origin} to {destination} on {date}")]
    NoMatchingFlight {
        origin: String,
        destination: String,
        date: Date,
    },
    #[error("cannot find the itinerary, please check your confirmation number ({0})")]
    UnknownConfirmation(String),
    #[error("cannot pick a flight from an empty list")]
    EmptyFlightList,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
