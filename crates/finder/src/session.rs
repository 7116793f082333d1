//! Search generations.
//!
//! Searches are not cancelled when a newer one starts. A [`SearchSession`]
//! hands each search a ticket and only lets the newest ticket publish, so a
//! slow earlier search can never overwrite the output of a later one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation token of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct SearchSession {
    latest: AtomicU64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search, superseding every earlier ticket.
    pub fn begin(&self) -> SearchTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket { generation }
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.generation
    }

    /// Hand back `outcome` if `ticket` is still the latest search, otherwise drop it.
    pub fn publish<T>(&self, ticket: SearchTicket, outcome: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(outcome)
        } else {
            tracing::debug!(
                "Discarding stale search result (generation {}, latest {})",
                ticket.generation,
                self.latest.load(Ordering::SeqCst)
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_increase() {
        let session = SearchSession::new();
        let first = session.begin();
        let second = session.begin();
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let session = SearchSession::new();
        let slow = session.begin();
        let fast = session.begin();

        assert_eq!(session.publish(fast, "fast"), Some("fast"));
        assert_eq!(session.publish(slow, "slow"), None);
    }

    #[test]
    fn test_single_search_publishes() {
        let session = SearchSession::new();
        let ticket = session.begin();
        assert!(session.is_current(ticket));
        assert_eq!(session.publish(ticket, 42), Some(42));
    }
}
