use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic per-component request counter.
///
/// Every dispatched request takes a [`Ticket`]; its result may only be applied
/// while that ticket is still the latest one issued. Selection changes call
/// [`RequestSequence::invalidate`] so that everything in flight goes stale.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn new() -> Self { Self::default() }

    pub fn issue(&self) -> Ticket { Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1) }

    pub fn invalidate(&self) { self.latest.fetch_add(1, Ordering::AcqRel); }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

/// Result of a request whose response may have been overtaken.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Applied(T),
    /// A later request or a selection change made this response stale; it was dropped.
    Superseded,
}

impl<T> Outcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(val) => Some(val),
            Outcome::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool { matches!(self, Outcome::Superseded) }
}
