use crate::reference::{unique_reference, CONFIRMATION_LENGTH};
use crate::repository::ItineraryRepository;
use crate::{ServiceError, ServiceResult};
use aerodesk_domain::{Flight, Itinerary, UserProfile};

/// Books `flight` for `user`, returning the fresh confirmation number
/// and the stored itinerary. Every call books again: two identical
/// requests produce two distinct records.
pub fn book_flight(
    itineraries: &mut ItineraryRepository,
    flight: &Flight,
    user: &UserProfile,
) -> (String, Itinerary) {
    let confirmation_number = unique_reference(CONFIRMATION_LENGTH, |reference| {
        itineraries.contains(reference)
    });
    let itinerary = Itinerary::new(confirmation_number.clone(), user.clone(), flight.clone());
    itineraries.insert(itinerary.clone());
    tracing::info!(
        %confirmation_number,
        flight_id = %flight.flight_id,
        user = %user.name,
        "booked flight"
    );
    (confirmation_number, itinerary)
}

/// Fetch a booked itinerary; `None` for an unknown confirmation number,
/// which is an ordinary outcome the caller branches on.
pub fn get_itinerary<'a>(
    itineraries: &'a ItineraryRepository,
    confirmation_number: &str,
) -> Option<&'a Itinerary> {
    itineraries.get(confirmation_number)
}

/// Removes the itinerary under `confirmation_number`. The user is
/// recorded in the audit log only; cancellation is not restricted to
/// the original booker.
pub fn cancel_itinerary(
    itineraries: &mut ItineraryRepository,
    confirmation_number: &str,
    user: &UserProfile,
) -> ServiceResult<()> {
    match itineraries.remove(confirmation_number) {
        Some(itinerary) => {
            tracing::info!(
                %confirmation_number,
                flight_id = %itinerary.flight.flight_id,
                requested_by = %user.name,
                "cancelled itinerary"
            );
            Ok(())
        }
        None => Err(ServiceError::UnknownConfirmation(
            confirmation_number.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{FlightRepository, UserRepository};

    fn fixtures() -> (Flight, UserProfile) {
        let flight = FlightRepository::seeded().get("DA123").cloned().unwrap();
        let user = UserRepository::seeded().get("Adam").cloned().unwrap();
        (flight, user)
    }

    #[test]
    fn test_book_stores_the_itinerary_under_its_confirmation() {
        let (flight, user) = fixtures();
        let mut itineraries = ItineraryRepository::new();

        let (confirmation, itinerary) = book_flight(&mut itineraries, &flight, &user);

        assert_eq!(confirmation.len(), CONFIRMATION_LENGTH);
        assert_eq!(itinerary.confirmation_number, confirmation);
        assert_eq!(itinerary.flight, flight);
        assert_eq!(itinerary.user_profile, user);

        let stored = get_itinerary(&itineraries, &confirmation).unwrap();
        assert_eq!(stored.flight, flight);
        assert_eq!(stored.user_profile, user);
    }

    #[test]
    fn test_book_twice_is_two_distinct_bookings() {
        let (flight, user) = fixtures();
        let mut itineraries = ItineraryRepository::new();

        let (first, _) = book_flight(&mut itineraries, &flight, &user);
        let (second, _) = book_flight(&mut itineraries, &flight, &user);

        assert_ne!(first, second);
        assert_eq!(itineraries.len(), 2);
    }

    #[test]
    fn test_get_itinerary_absent_is_none() {
        let itineraries = ItineraryRepository::new();
        assert!(get_itinerary(&itineraries, "doesnotexist").is_none());
    }

    #[test]
    fn test_cancel_removes_exactly_the_named_booking() {
        let (flight, user) = fixtures();
        let mut itineraries = ItineraryRepository::new();

        let (keep, _) = book_flight(&mut itineraries, &flight, &user);
        let (drop, _) = book_flight(&mut itineraries, &flight, &user);

        cancel_itinerary(&mut itineraries, &drop, &user).unwrap();

        assert_eq!(itineraries.len(), 1);
        assert!(itineraries.contains(&keep));
        assert!(!itineraries.contains(&drop));
    }

    #[test]
    fn test_cancel_unknown_confirmation_is_not_found() {
        let (flight, user) = fixtures();
        let mut itineraries = ItineraryRepository::new();
        book_flight(&mut itineraries, &flight, &user);

        let result = cancel_itinerary(&mut itineraries, "doesnotexist", &user);

        let error = result.unwrap_err();
        assert!(matches!(error, ServiceError::UnknownConfirmation(_)));
        assert!(error.to_string().contains("doesnotexist"));
        // The repository is untouched on failure.
        assert_eq!(itineraries.len(), 1);
    }

    #[test]
    fn test_cancel_is_not_ownership_restricted() {
        let (flight, user) = fixtures();
        let other = UserRepository::seeded().get("Bob").cloned().unwrap();
        let mut itineraries = ItineraryRepository::new();

        let (confirmation, _) = book_flight(&mut itineraries, &flight, &user);
        cancel_itinerary(&mut itineraries, &confirmation, &other).unwrap();

        assert!(itineraries.is_empty());
    }
}
