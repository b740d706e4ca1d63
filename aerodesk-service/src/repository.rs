use aerodesk_domain::{Flight, FlightDateTime, Itinerary, Ticket, UserProfile};
use std::collections::HashMap;

/// Customers known at startup, keyed by name.
#[derive(Debug, Default)]
pub struct UserRepository {
    users: HashMap<String, UserProfile>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo customer set.
    pub fn seeded() -> Self {
        let mut repo = Self::new();
        for (name, email) in [
            ("Adam", "adam@gmail.com"),
            ("Bob", "bob@gmail.com"),
            ("Chelsie", "chelsie@gmail.com"),
            ("David", "david@gmail.com"),
        ] {
            repo.insert(UserProfile::new(name, email));
        }
        repo
    }

    pub fn insert(&mut self, profile: UserProfile) {
        self.users.insert(profile.name.clone(), profile);
    }

    pub fn get(&self, name: &str) -> Option<&UserProfile> {
        self.users.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserProfile> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Scheduled flights, keyed by flight id. Iteration follows seeding
/// order, so searches come back in a stable, reproducible order.
#[derive(Debug, Default)]
pub struct FlightRepository {
    flights: HashMap<String, Flight>,
    order: Vec<String>,
}

impl FlightRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo schedule: two SFO→JFK departures on 2025-09-01 and two
    /// SFO→SNA departures on 2025-10-01.
    pub fn seeded() -> Self {
        let mut repo = Self::new();
        let schedule = [
            ("DA123", "SFO", "JFK", FlightDateTime::new(2025, 9, 1, 1), 3.0, 200.0),
            ("DA125", "SFO", "JFK", FlightDateTime::new(2025, 9, 1, 7), 9.0, 500.0),
            ("DA456", "SFO", "SNA", FlightDateTime::new(2025, 10, 1, 1), 2.0, 100.0),
            ("DA460", "SFO", "SNA", FlightDateTime::new(2025, 10, 1, 9), 2.0, 120.0),
        ];
        for (flight_id, origin, destination, date_time, duration, price) in schedule {
            repo.insert(Flight {
                flight_id: flight_id.to_string(),
                origin: origin.to_string(),
                destination: destination.to_string(),
                date_time,
                duration,
                price,
                available_seats: 50,
            });
        }
        repo
    }

    /// First insert under a flight id wins; ids are immutable once
    /// seeded.
    pub fn insert(&mut self, flight: Flight) {
        if !self.flights.contains_key(&flight.flight_id) {
            self.order.push(flight.flight_id.clone());
            self.flights.insert(flight.flight_id.clone(), flight);
        }
    }

    pub fn get(&self, flight_id: &str) -> Option<&Flight> {
        self.flights.get(flight_id)
    }

    /// Flights in seeding order.
    pub fn iter(&self) -> impl Iterator<Item = &Flight> {
        self.order.iter().filter_map(|id| self.flights.get(id))
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

/// Active bookings, keyed by confirmation number.
#[derive(Debug, Default)]
pub struct ItineraryRepository {
    itineraries: HashMap<String, Itinerary>,
}

impl ItineraryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, confirmation_number: &str) -> bool {
        self.itineraries.contains_key(confirmation_number)
    }

    pub fn insert(&mut self, itinerary: Itinerary) {
        self.itineraries
            .insert(itinerary.confirmation_number.clone(), itinerary);
    }

    pub fn get(&self, confirmation_number: &str) -> Option<&Itinerary> {
        self.itineraries.get(confirmation_number)
    }

    pub fn remove(&mut self, confirmation_number: &str) -> Option<Itinerary> {
        self.itineraries.remove(confirmation_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Itinerary> {
        self.itineraries.values()
    }

    pub fn len(&self) -> usize {
        self.itineraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }
}

/// Filed support tickets, keyed by ticket id.
#[derive(Debug, Default)]
pub struct TicketRepository {
    tickets: HashMap<String, Ticket>,
}

impl TicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, ticket_id: &str) -> bool {
        self.tickets.contains_key(ticket_id)
    }

    pub fn insert(&mut self, ticket: Ticket) {
        self.tickets.insert(ticket.ticket_id.clone(), ticket);
    }

    pub fn get(&self, ticket_id: &str) -> Option<&Ticket> {
        self.tickets.get(ticket_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
