//! Game setup: the board plus the round-reveal schedule.
//!
//! A setup is assembled by the caller (or a packaged game) before play
//! and is immutable for the game's lifetime. Its validity — non-empty
//! graph, non-empty schedule — is checked when the first game state is
//! constructed, not here.

use crate::board::BoardGraph;

/// Immutable per-game configuration.
///
/// The schedule holds one flag per round; `true` marks a reveal round.
/// Its length fixes the maximum number of fugitive turns in the game.
#[derive(Clone, Debug)]
pub struct GameSetup {
    pub graph: BoardGraph,
    pub schedule: Vec<bool>,
}

impl GameSetup {
    /// Create a setup from a board and a reveal schedule.
    #[must_use]
    pub fn new(graph: BoardGraph, schedule: Vec<bool>) -> Self {
        Self { graph, schedule }
    }

    /// Number of rounds in the schedule.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.schedule.len()
    }

    /// Is the round at `index` (0-based) a reveal round?
    ///
    /// Indices past the schedule answer `false`.
    #[must_use]
    pub fn is_reveal_round(&self, index: usize) -> bool {
        self.schedule.get(index).copied().unwrap_or(false)
    }
}
