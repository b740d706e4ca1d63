pub mod date;
pub mod flight;
pub mod itinerary;
pub mod profile;
pub mod ticket;

pub use date::Date;
pub use flight::{Flight, FlightDateTime};
pub use itinerary::Itinerary;
pub use profile::UserProfile;
pub use ticket::Ticket;
