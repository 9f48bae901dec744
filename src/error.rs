//! Error taxonomy for the engine.
//!
//! Two kinds only, both fatal to the attempted operation: a configuration
//! that violates a construction invariant, and a move submitted outside
//! the current legal-move set. Neither is ever retried by the engine —
//! there are no transient failures, since it performs no I/O.

use thiserror::Error;

use crate::board::Location;
use crate::core::{Piece, Ticket};
use crate::moves::Move;

/// A construction invariant was violated.
///
/// The caller must fix the configuration; retrying with the same input
/// fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("round schedule is empty")]
    EmptySchedule,
    #[error("board graph has no locations")]
    EmptyGraph,
    #[error("expected the fugitive piece, got {0}")]
    NotFugitive(Piece),
    #[error("no pursuers in play")]
    NoPursuers,
    #[error("{0} is not a pursuer piece")]
    NotPursuer(Piece),
    #[error("duplicate pursuer piece {0}")]
    DuplicatePursuer(Piece),
    #[error("{piece} holds {count} {ticket} tickets")]
    ForbiddenTicket {
        piece: Piece,
        ticket: Ticket,
        count: u32,
    },
    #[error("{first} and {second} both occupy {location}")]
    SharedLocation {
        first: Piece,
        second: Piece,
        location: Location,
    },
}

/// Any error the engine can raise.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The move is not in the current legal-move set. This includes every
    /// move submitted against a terminal state, whose legal-move set is
    /// always empty. The prior state is untouched by the rejected call.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
}
