//! Game rules: legal-move enumeration and win-condition evaluation.
//!
//! Both are pure functions over the entity model — they read the board
//! and players and produce sets, never touching state. The state engine
//! runs them as part of its construction pipeline.

pub mod movegen;
pub mod winner;

pub use movegen::{available_moves, single_moves};
pub use winner::determine_winner;
