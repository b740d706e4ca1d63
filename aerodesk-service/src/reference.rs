use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a booking confirmation number.
pub const CONFIRMATION_LENGTH: usize = 8;

/// Length of a support ticket reference.
pub const TICKET_LENGTH: usize = 6;

/// A random lowercase-alphanumeric reference of the given length.
pub fn random_reference(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

/// Draws references until `taken` clears. The 36^length key space makes
/// a repeat draw astronomically rare, but the loop must keep going until
/// it lands on a free reference rather than ever hand out a duplicate.
pub fn unique_reference(length: usize, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let reference = random_reference(length);
        if !taken(&reference) {
            return reference;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_reference_length() {
        assert_eq!(random_reference(CONFIRMATION_LENGTH).len(), 8);
        assert_eq!(random_reference(TICKET_LENGTH).len(), 6);
    }

    #[test]
    fn test_reference_charset() {
        let reference = random_reference(64);
        assert!(reference
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_unique_reference_retries_on_collision() {
        let draws = Cell::new(0u32);
        let reference = unique_reference(CONFIRMATION_LENGTH, |_| {
            // Reject the first draw to force one retry.
            draws.set(draws.get() + 1);
            draws.get() == 1
        });

        assert_eq!(draws.get(), 2);
        assert_eq!(reference.len(), CONFIRMATION_LENGTH);
    }
}
