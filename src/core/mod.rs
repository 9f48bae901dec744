//! Core entity model: pieces, tickets, players, the travel log, setup, RNG.
//!
//! These are the value types the game state engine is built from. All of
//! them are immutable values; the only owner of live player data is the
//! `GameState` it belongs to.

pub mod log;
pub mod piece;
pub mod player;
pub mod rng;
pub mod setup;
pub mod ticket;

pub use log::LogEntry;
pub use piece::{Piece, PursuerId};
pub use player::Player;
pub use rng::GameRng;
pub use setup::GameSetup;
pub use ticket::{Ticket, TicketBook};
