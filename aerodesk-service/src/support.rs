use crate::reference::{unique_reference, TICKET_LENGTH};
use crate::repository::{TicketRepository, UserRepository};
use aerodesk_domain::{Ticket, UserProfile};

/// Fetch a user profile by name; `None` for unknown customers.
pub fn get_user<'a>(users: &'a UserRepository, name: &str) -> Option<&'a UserProfile> {
    users.get(name)
}

/// Files a support ticket carrying the user's request verbatim and
/// returns the ticket reference. Ticket references go through the same
/// uniqueness loop as confirmation numbers, just shorter.
pub fn file_ticket(
    tickets: &mut TicketRepository,
    user_request: &str,
    user: &UserProfile,
) -> String {
    let ticket_id = unique_reference(TICKET_LENGTH, |reference| tickets.contains(reference));
    tickets.insert(Ticket::new(
        ticket_id.clone(),
        user_request.to_string(),
        user.clone(),
    ));
    tracing::info!(%ticket_id, user = %user.name, "filed support ticket");
    ticket_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_user_known_and_unknown() {
        let users = UserRepository::seeded();

        assert_eq!(get_user(&users, "Chelsie").unwrap().email, "chelsie@gmail.com");
        assert!(get_user(&users, "Zoe").is_none());
    }

    #[test]
    fn test_get_user_is_idempotent() {
        let users = UserRepository::seeded();
        assert_eq!(get_user(&users, "David"), get_user(&users, "David"));
    }

    #[test]
    fn test_file_ticket_stores_the_request_verbatim() {
        let users = UserRepository::seeded();
        let user = users.get("Bob").cloned().unwrap();
        let mut tickets = TicketRepository::new();

        let request = "My bag never arrived in JFK!";
        let ticket_id = file_ticket(&mut tickets, request, &user);

        assert_eq!(ticket_id.len(), TICKET_LENGTH);
        let stored = tickets.get(&ticket_id).unwrap();
        assert_eq!(stored.user_request, request);
        assert_eq!(stored.user_profile, user);
    }

    #[test]
    fn test_file_ticket_twice_is_two_tickets() {
        let users = UserRepository::seeded();
        let user = users.get("Bob").cloned().unwrap();
        let mut tickets = TicketRepository::new();

        let first = file_ticket(&mut tickets, "same request", &user);
        let second = file_ticket(&mut tickets, "same request", &user);

        assert_ne!(first, second);
        assert_eq!(tickets.len(), 2);
    }
}
