use crate::repository::FlightRepository;
use crate::{ServiceError, ServiceResult};
use aerodesk_domain::{Date, Flight};
use std::cmp::Ordering;

/// Flights from `origin` to `destination` departing on `date`, in
/// repository order. The departure hour is not part of the match, so a
/// search returns flights at any hour of that day. Zero matches is a
/// recoverable error the caller should relay, not a fault.
pub fn search_flights(
    flights: &FlightRepository,
    date: &Date,
    origin: &str,
    destination: &str,
) -> ServiceResult<Vec<Flight>> {
    let matches: Vec<Flight> = flights
        .iter()
        .filter(|flight| {
            flight.origin == origin
                && flight.destination == destination
                && flight.date_time.on_date(date)
        })
        .cloned()
        .collect();

    if matches.is_empty() {
        tracing::debug!(%date, origin, destination, "no flights matched");
        return Err(ServiceError::NoMatchingFlight {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date: *date,
        });
    }

    tracing::debug!(%date, origin, destination, count = matches.len(), "flights matched");
    Ok(matches)
}

/// Index of the lexicographically smallest `(duration, price)` pair.
/// Ties on both fields keep the earliest index.
pub fn best_by_cost(costs: impl IntoIterator<Item = (f64, f64)>) -> Option<usize> {
    let mut best: Option<(usize, (f64, f64))> = None;
    for (index, cost) in costs.into_iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, current)) => match cost.0.total_cmp(&current.0) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => cost.1.total_cmp(&current.1) == Ordering::Less,
            },
        };
        if better {
            best = Some((index, cost));
        }
    }
    best.map(|(index, _)| index)
}

/// The shortest flight, and the cheaper one on equal duration. An empty
/// list is a caller bug and comes back as an error, never a silent
/// default.
pub fn pick_best(flights: &[Flight]) -> ServiceResult<&Flight> {
    best_by_cost(flights.iter().map(|f| (f.duration, f.price)))
        .map(|index| &flights[index])
        .ok_or(ServiceError::EmptyFlightList)
}
