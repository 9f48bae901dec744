//! Ticket kinds and per-player ticket inventories.
//!
//! ## Ticket
//!
//! A closed enumeration: one kind per transport mode, plus the secret
//! ticket (usable on any edge) and the double ticket (authorizes a
//! compound fugitive move). Pursuers never hold secret or double tickets;
//! that invariant is enforced when a game state is constructed.
//!
//! ## TicketBook
//!
//! Ticket-kind → count storage backed by a fixed array for O(1) access,
//! indexed by the ticket's declaration position. A `Copy` value type:
//! updates go through the functional `Player` API, never shared mutation.

use serde::{Deserialize, Serialize};

/// A ticket kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    /// Usable on any edge regardless of its transport modes.
    Secret,
    /// Authorizes a compound (two-leg) fugitive move.
    Double,
}

impl Ticket {
    /// All ticket kinds, in declaration order.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "taxi",
            Ticket::Bus => "bus",
            Ticket::Underground => "underground",
            Ticket::Secret => "secret",
            Ticket::Double => "double",
        };
        write!(f, "{}", name)
    }
}

/// Per-player ticket counts with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_pursuit::core::{Ticket, TicketBook};
///
/// let book = TicketBook::new()
///     .with(Ticket::Taxi, 4)
///     .with(Ticket::Secret, 2);
///
/// assert_eq!(book.count(Ticket::Taxi), 4);
/// assert!(book.has(Ticket::Secret));
/// assert!(!book.has(Ticket::Bus));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketBook {
    counts: [u32; Ticket::ALL.len()],
}

impl TicketBook {
    /// Create an empty book (every count zero).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Ticket::ALL.len()],
        }
    }

    /// Set the count for a ticket kind (builder pattern).
    #[must_use]
    pub const fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts[ticket.index()] = count;
        self
    }

    /// The count held for a ticket kind.
    #[must_use]
    pub const fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Does the book hold at least one ticket of this kind?
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Does the book hold at least `n` tickets of this kind?
    #[must_use]
    pub const fn has_at_least(&self, ticket: Ticket, n: u32) -> bool {
        self.count(ticket) >= n
    }

    /// Is every count zero?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// A copy with one ticket of this kind added.
    #[must_use]
    pub const fn grant(mut self, ticket: Ticket) -> Self {
        self.counts[ticket.index()] += 1;
        self
    }

    /// A copy with one ticket of this kind removed.
    ///
    /// Callers check `has` first; a missing ticket saturates at zero.
    #[must_use]
    pub fn spend(mut self, ticket: Ticket) -> Self {
        let idx = ticket.index();
        debug_assert!(self.counts[idx] > 0, "spending a ticket the book does not hold");
        self.counts[idx] = self.counts[idx].saturating_sub(1);
        self
    }

    /// Iterate over `(ticket, count)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL.iter().map(|&t| (t, self.count(t)))
    }
}
