//! Per-player state: identity, position and ticket inventory.
//!
//! A `Player` is an immutable value owned by exactly one game state.
//! Updates are functional — `at`, `spend`, `grant` return a new player —
//! so old game states keep valid snapshots of every player they own.

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::ticket::{Ticket, TicketBook};
use crate::board::Location;

/// One player: a piece, its current location, and its tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    piece: Piece,
    location: Location,
    tickets: TicketBook,
}

impl Player {
    /// Create a player.
    #[must_use]
    pub const fn new(piece: Piece, location: Location, tickets: TicketBook) -> Self {
        Self {
            piece,
            location,
            tickets,
        }
    }

    /// The piece this player moves.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// The player's current location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// The player's ticket inventory.
    #[must_use]
    pub const fn tickets(&self) -> &TicketBook {
        &self.tickets
    }

    /// Does the player hold at least one ticket of this kind?
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.tickets.has(ticket)
    }

    /// Does the player hold at least `n` tickets of this kind?
    #[must_use]
    pub const fn has_at_least(&self, ticket: Ticket, n: u32) -> bool {
        self.tickets.has_at_least(ticket, n)
    }

    /// A copy of this player at a new location.
    #[must_use]
    pub const fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// A copy of this player with the given tickets spent.
    #[must_use]
    pub fn spend(mut self, tickets: impl IntoIterator<Item = Ticket>) -> Self {
        for ticket in tickets {
            self.tickets = self.tickets.spend(ticket);
        }
        self
    }

    /// A copy of this player with one ticket of the given kind added.
    #[must_use]
    pub const fn grant(mut self, ticket: Ticket) -> Self {
        self.tickets = self.tickets.grant(ticket);
        self
    }
}
