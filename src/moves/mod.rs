//! Move representation: elementary and compound moves.
//!
//! Moves are immutable value facts — mover, source, ticket(s),
//! destination(s) — and never carry game-state context. Equality and
//! hashing cover the full identity, so storing moves in a set
//! deduplicates naturally. `Move` is a two-variant sum type, pattern
//! matched wherever the legs or the final destination are needed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Location;
use crate::core::{Piece, Ticket};

/// A single-edge traversal consuming one ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SingleMove {
    pub piece: Piece,
    pub source: Location,
    pub ticket: Ticket,
    pub destination: Location,
}

impl SingleMove {
    /// Create an elementary move.
    #[must_use]
    pub const fn new(piece: Piece, source: Location, ticket: Ticket, destination: Location) -> Self {
        Self {
            piece,
            source,
            ticket,
            destination,
        }
    }
}

impl std::fmt::Display for SingleMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} ({})",
            self.piece,
            self.source.raw(),
            self.destination.raw(),
            self.ticket
        )
    }
}

/// Two elementary fugitive moves performed as one turn.
///
/// Only the fugitive may move compound, so the variant carries no piece
/// field; `Move::piece` answers `Fugitive` for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub source: Location,
    pub ticket1: Ticket,
    pub destination1: Location,
    pub ticket2: Ticket,
    pub destination2: Location,
}

impl DoubleMove {
    /// Create a compound move.
    #[must_use]
    pub const fn new(
        source: Location,
        ticket1: Ticket,
        destination1: Location,
        ticket2: Ticket,
        destination2: Location,
    ) -> Self {
        Self {
            source,
            ticket1,
            destination1,
            ticket2,
            destination2,
        }
    }
}

impl std::fmt::Display for DoubleMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fugitive {} -> {} ({}) -> {} ({})",
            self.source.raw(),
            self.destination1.raw(),
            self.ticket1,
            self.destination2.raw(),
            self.ticket2
        )
    }
}

/// A legal-move candidate: elementary or compound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    /// The piece making this move.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        match self {
            Move::Single(m) => m.piece,
            Move::Double(_) => Piece::Fugitive,
        }
    }

    /// The location the move starts from.
    #[must_use]
    pub const fn source(&self) -> Location {
        match self {
            Move::Single(m) => m.source,
            Move::Double(m) => m.source,
        }
    }

    /// The final destination (second leg for a compound move).
    #[must_use]
    pub const fn destination(&self) -> Location {
        match self {
            Move::Single(m) => m.destination,
            Move::Double(m) => m.destination2,
        }
    }

    /// Every ticket this move consumes, in spend order.
    ///
    /// A compound move lists both leg tickets and then the double ticket:
    /// the authorization itself is a consumed resource, on top of the two
    /// legs.
    #[must_use]
    pub fn tickets(&self) -> SmallVec<[Ticket; 3]> {
        match self {
            Move::Single(m) => SmallVec::from_slice(&[m.ticket]),
            Move::Double(m) => SmallVec::from_slice(&[m.ticket1, m.ticket2, Ticket::Double]),
        }
    }

    /// The legs of this move as `(ticket, destination)` pairs, in order.
    ///
    /// One pair for an elementary move, two for a compound move. Unlike
    /// `tickets`, the double authorization is not a leg.
    #[must_use]
    pub fn legs(&self) -> SmallVec<[(Ticket, Location); 2]> {
        match self {
            Move::Single(m) => SmallVec::from_slice(&[(m.ticket, m.destination)]),
            Move::Double(m) => {
                SmallVec::from_slice(&[(m.ticket1, m.destination1), (m.ticket2, m.destination2)])
            }
        }
    }
}

impl From<SingleMove> for Move {
    fn from(m: SingleMove) -> Self {
        Move::Single(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Single(m) => write!(f, "{}", m),
            Move::Double(m) => write!(f, "{}", m),
        }
    }
}
