use crate::tools::{ToolError, ToolExecutor, ToolRegistry};
use aerodesk_domain::Date;
use aerodesk_service::repository::{
    FlightRepository, ItineraryRepository, TicketRepository, UserRepository,
};
use aerodesk_service::{booking, search, support};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The four stores behind the service desk: one instance per process,
/// shared by every tool. The mutex keeps each tool's
/// generate-check-insert sequence atomic when calls overlap.
#[derive(Debug, Default)]
pub struct DeskState {
    pub users: UserRepository,
    pub flights: FlightRepository,
    pub itineraries: ItineraryRepository,
    pub tickets: TicketRepository,
}

impl DeskState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo data: four customers and four flights; no bookings or
    /// tickets yet.
    pub fn seeded() -> Self {
        Self {
            users: UserRepository::seeded(),
            flights: FlightRepository::seeded(),
            itineraries: ItineraryRepository::new(),
            tickets: TicketRepository::new(),
        }
    }
}

pub type SharedDesk = Arc<Mutex<DeskState>>;

fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

fn date_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "year": { "type": "integer" },
            "month": { "type": "integer" },
            "day": { "type": "integer" }
        },
        "required": ["year", "month", "day"]
    })
}

/// Searches the flight schedule for a date and city pair.
pub struct SearchFlightsTool {
    desk: SharedDesk,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    date: Date,
    origin: String,
    destination: String,
}

#[async_trait]
impl ToolExecutor for SearchFlightsTool {
    fn name(&self) -> &str {
        "fetch_flight_info"
    }

    fn description(&self) -> &str {
        "Fetch flight information from origin to destination on the given date"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "date": date_schema(),
                "origin": { "type": "string", "description": "Origin airport code" },
                "destination": { "type": "string", "description": "Destination airport code" }
            },
            "required": ["date", "origin", "destination"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<String, ToolError> {
        let args: SearchArgs = parse_args(arguments)?;
        let desk = self.desk.lock().await;
        let flights =
            search::search_flights(&desk.flights, &args.date, &args.origin, &args.destination)?;
        Ok(serde_json::to_string(&flights)?)
    }
}

/// Picks the best flight from a candidate list: shortest duration,
/// cheapest on ties. Accepts full flight records or loose maps, as long
/// as each entry exposes `duration` and `price`; entries are normalized
/// here once, and the winner is returned exactly as it was passed in.
pub struct PickFlightTool;

#[derive(Debug, Deserialize)]
struct PickArgs {
    flights: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct FlightCost {
    duration: f64,
    price: f64,
}

#[async_trait]
impl ToolExecutor for PickFlightTool {
    fn name(&self) -> &str {
        "pick_flight"
    }

    fn description(&self) -> &str {
        "Pick the best flight from a candidate list: shortest duration first, cheapest on ties"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "flights": {
                    "type": "array",
                    "description": "Candidate flights; each entry needs numeric 'duration' and 'price' fields",
                    "items": { "type": "object" }
                }
            },
            "required": ["flights"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<String, ToolError> {
        let args: PickArgs = parse_args(arguments)?;

        let costs = args
            .flights
            .iter()
            .map(|entry| {
                serde_json::from_value::<FlightCost>(entry.clone()).map_err(|_| {
                    ToolError::InvalidArguments(
                        "each flight entry needs numeric 'duration' and 'price' fields".to_string(),
                    )
                })
            })
            .collect::<Result<Vec<FlightCost>, ToolError>>()?;

        let index = search::best_by_cost(costs.iter().map(|c| (c.duration, c.price)))
            .ok_or(aerodesk_service::ServiceError::EmptyFlightList)?;
        Ok(serde_json::to_string(&args.flights[index])?)
    }
}

/// Books a seeded flight for a known user and reports the confirmation
/// number.
pub struct BookFlightTool {
    desk: SharedDesk,
}

#[derive(Debug, Deserialize)]
struct BookArgs {
    flight_id: String,
    user_name: String,
}

#[async_trait]
impl ToolExecutor for BookFlightTool {
    fn name(&self) -> &str {
        "book_flight"
    }

    fn description(&self) -> &str {
        "Book a flight on behalf of the user"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "flight_id": { "type": "string" },
                "user_name": { "type": "string" }
            },
            "required": ["flight_id", "user_name"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<String, ToolError> {
        let args: BookArgs = parse_args(arguments)?;
        let mut desk = self.desk.lock().await;

        let flight = desk.flights.get(&args.flight_id).cloned().ok_or_else(|| {
            ToolError::InvalidArguments(format!("unknown flight_id '{}'", args.flight_id))
        })?;
        let user = desk.users.get(&args.user_name).cloned().ok_or_else(|| {
            ToolError::InvalidArguments(format!("unknown user '{}'", args.user_name))
        })?;

        let (confirmation_number, itinerary) =
            booking::book_flight(&mut desk.itineraries, &flight, &user);
        Ok(serde_json::to_string(&json!({
            "confirmation_number": confirmation_number,
            "itinerary": itinerary,
        }))?)
    }
}

/// Looks a booking up by confirmation number; an unknown number yields
/// JSON `null` rather than an error.
pub struct GetItineraryTool {
    desk: SharedDesk,
}

#[derive(Debug, Deserialize)]
struct ItineraryArgs {
    confirmation_number: String,
}

#[async_trait]
impl ToolExecutor for GetItineraryTool {
    fn name(&self) -> &str {
        "fetch_itinerary"
    }

    fn description(&self) -> &str {
        "Fetch a booked itinerary by its confirmation number"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "confirmation_number": { "type": "string" }
            },
            "required": ["confirmation_number"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<String, ToolError> {
        let args: ItineraryArgs = parse_args(arguments)?;
        let desk = self.desk.lock().await;
        let itinerary = booking::get_itinerary(&desk.itineraries, &args.confirmation_number);
        Ok(serde_json::to_string(&itinerary)?)
    }
}

/// Cancels a booking by confirmation number.
pub struct CancelItineraryTool {
    desk: SharedDesk,
}

#[derive(Debug, Deserialize)]
struct CancelArgs {
    confirmation_number: String,
    user_name: String,
}

#[async_trait]
impl ToolExecutor for CancelItineraryTool {
    fn name(&self) -> &str {
        "cancel_itinerary"
    }

    fn description(&self) -> &str {
        "Cancel an itinerary on behalf of the user"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "confirmation_number": { "type": "string" },
                "user_name": { "type": "string" }
            },
            "required": ["confirmation_number", "user_name"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<String, ToolError> {
        let args: CancelArgs = parse_args(arguments)?;
        let mut desk = self.desk.lock().await;

        let user = desk.users.get(&args.user_name).cloned().ok_or_else(|| {
            ToolError::InvalidArguments(format!("unknown user '{}'", args.user_name))
        })?;

        booking::cancel_itinerary(&mut desk.itineraries, &args.confirmation_number, &user)?;
        Ok(serde_json::to_string(&json!({
            "cancelled": args.confirmation_number,
        }))?)
    }
}

/// Looks a customer profile up by name; unknown names yield JSON `null`.
pub struct GetUserTool {
    desk: SharedDesk,
}

#[derive(Debug, Deserialize)]
struct UserArgs {
    name: String,
}

#[async_trait]
impl ToolExecutor for GetUserTool {
    fn name(&self) -> &str {
        "get_user_info"
    }

    fn description(&self) -> &str {
        "Fetch the user profile with the given name"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" }
            },
            "required": ["name"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<String, ToolError> {
        let args: UserArgs = parse_args(arguments)?;
        let desk = self.desk.lock().await;
        let user = support::get_user(&desk.users, &args.name);
        Ok(serde_json::to_string(&user)?)
    }
}

/// Files a support ticket for anything the other tools cannot handle.
pub struct FileTicketTool {
    desk: SharedDesk,
}

#[derive(Debug, Deserialize)]
struct TicketArgs {
    user_request: String,
    user_name: String,
}

#[async_trait]
impl ToolExecutor for FileTicketTool {
    fn name(&self) -> &str {
        "file_ticket"
    }

    fn description(&self) -> &str {
        "File a customer support ticket when the request cannot be handled by the other tools"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "user_request": { "type": "string", "description": "The user's request, verbatim" },
                "user_name": { "type": "string" }
            },
            "required": ["user_request", "user_name"]
        })
    }

    async fn execute(&self, arguments: Value) -> Result<String, ToolError> {
        let args: TicketArgs = parse_args(arguments)?;
        let mut desk = self.desk.lock().await;

        let user = desk.users.get(&args.user_name).cloned().ok_or_else(|| {
            ToolError::InvalidArguments(format!("unknown user '{}'", args.user_name))
        })?;

        let ticket_id = support::file_ticket(&mut desk.tickets, &args.user_request, &user);
        Ok(serde_json::to_string(&json!({ "ticket_id": ticket_id }))?)
    }
}

/// Registers the full service-desk tool set against one shared state.
pub fn register_desk_tools(registry: &mut ToolRegistry, desk: SharedDesk) {
    registry.register(SearchFlightsTool { desk: desk.clone() });
    registry.register(PickFlightTool);
    registry.register(BookFlightTool { desk: desk.clone() });
    registry.register(GetItineraryTool { desk: desk.clone() });
    registry.register(CancelItineraryTool { desk: desk.clone() });
    registry.register(GetUserTool { desk: desk.clone() });
    registry.register(FileTicketTool { desk });
}
