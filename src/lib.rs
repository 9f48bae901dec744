//! # rust-pursuit
//!
//! A rules engine for a hidden-movement pursuit board game: one fugitive
//! evades a set of pursuers across a fixed transport graph, spending
//! typed tickets, with the fugitive's position periodically revealed
//! through a travel log.
//!
//! ## Design Principles
//!
//! 1. **Immutable states**: a `GameState` is fully resolved at
//!    construction — legal moves and winner included — and never mutated.
//!    `advance` returns a new state; old states stay valid snapshots.
//!
//! 2. **Rules as pure functions**: move generation and win evaluation
//!    read the entity model and produce sets. All game state lives in the
//!    state value; there is no process-wide mutable state.
//!
//! 3. **Fail fast, fail whole**: an invalid configuration or an illegal
//!    move fails the whole call with an error before anything is touched.
//!    There are no transient failures — the engine performs no I/O.
//!
//! ## Modules
//!
//! - `board`: locations and the transport graph
//! - `core`: pieces, tickets, players, travel log, setup, RNG
//! - `moves`: elementary and compound move value types
//! - `rules`: legal-move enumeration and win-condition evaluation
//! - `state`: the game state engine (construction, transition, queries)
//! - `model`: observer wrapper for driver/UI code
//! - `games`: packaged ready-to-play game definitions

pub mod board;
pub mod core;
pub mod error;
pub mod games;
pub mod model;
pub mod moves;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::board::{BoardGraph, Location, Transport};

pub use crate::core::{GameRng, GameSetup, LogEntry, Piece, Player, PursuerId, Ticket, TicketBook};

pub use crate::error::{ConfigError, GameError};

pub use crate::moves::{DoubleMove, Move, SingleMove};

pub use crate::rules::{available_moves, determine_winner, single_moves};

pub use crate::state::GameState;

pub use crate::model::{Event, Model, Observer, ObserverId};
