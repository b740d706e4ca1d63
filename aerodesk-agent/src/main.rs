use aerodesk_agent::desk::{register_desk_tools, DeskState};
use aerodesk_agent::protocol::ToolCall;
use aerodesk_agent::tools::ToolRegistry;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scripted walk through the service desk: search, pick, book, look the
/// booking up, cancel it (twice, to show the error path), then file a
/// ticket. An LM-driven loop would issue the same calls from free text.
#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aerodesk_agent=debug,aerodesk_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let desk = Arc::new(Mutex::new(DeskState::seeded()));
    let mut registry = ToolRegistry::new();
    register_desk_tools(&mut registry, desk.clone());

    for definition in registry.list_definitions() {
        tracing::info!(tool = %definition.name, "{}", definition.description);
    }

    let flights = run(
        &registry,
        "fetch_flight_info",
        json!({
            "date": { "year": 2025, "month": 9, "day": 1 },
            "origin": "SFO",
            "destination": "JFK"
        }),
    )
    .await
    .expect("seeded search should match");

    let flights: Value = serde_json::from_str(&flights).expect("search result is JSON");
    let best = run(&registry, "pick_flight", json!({ "flights": flights }))
        .await
        .expect("non-empty list always picks");
    let best: Value = serde_json::from_str(&best).expect("pick result is JSON");
    tracing::info!(flight_id = %best["flight_id"], "picked flight");

    let booked = run(
        &registry,
        "book_flight",
        json!({ "flight_id": best["flight_id"], "user_name": "Adam" }),
    )
    .await
    .expect("booking a seeded flight succeeds");
    let booked: Value = serde_json::from_str(&booked).expect("booking result is JSON");
    let confirmation = booked["confirmation_number"]
        .as_str()
        .expect("booking carries a confirmation number")
        .to_string();

    run(
        &registry,
        "fetch_itinerary",
        json!({ "confirmation_number": confirmation }),
    )
    .await
    .expect("fresh booking is retrievable");

    run(
        &registry,
        "cancel_itinerary",
        json!({ "confirmation_number": confirmation, "user_name": "Adam" }),
    )
    .await
    .expect("first cancellation succeeds");

    // Second cancellation demonstrates the recoverable NotFound path.
    let second = run(
        &registry,
        "cancel_itinerary",
        json!({ "confirmation_number": confirmation, "user_name": "Adam" }),
    )
    .await;
    assert!(second.is_none(), "second cancellation must fail");

    run(
        &registry,
        "file_ticket",
        json!({
            "user_request": "Please add a vegetarian meal to my next booking",
            "user_name": "Chelsie"
        }),
    )
    .await
    .expect("filing a ticket succeeds");

    let state = desk.lock().await;
    tracing::info!(
        itineraries = state.itineraries.len(),
        tickets = state.tickets.len(),
        "desk state at exit"
    );
}

async fn run(registry: &ToolRegistry, name: &str, arguments: Value) -> Option<String> {
    let call = ToolCall {
        id: name.to_string(),
        name: name.to_string(),
        arguments,
    };
    match registry.execute(&call).await {
        Ok(result) => {
            tracing::info!(tool = name, "{}", result.content);
            Some(result.content)
        }
        Err(error) => {
            tracing::warn!(tool = name, "{}", error);
            None
        }
    }
}
