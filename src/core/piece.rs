//! Piece identities: the fugitive and the pursuers.
//!
//! A `Piece` names a side and, for pursuers, which pursuer. It carries no
//! position or inventory — that lives in `Player`, owned by the game
//! state the player belongs to.

use serde::{Deserialize, Serialize};

/// Identifier for one pursuer, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PursuerId(pub u8);

impl PursuerId {
    /// Create a new pursuer ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the IDs for a game with `count` pursuers.
    pub fn all(count: usize) -> impl Iterator<Item = PursuerId> {
        (0..count as u8).map(PursuerId)
    }
}

impl std::fmt::Display for PursuerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pursuer {}", self.0)
    }
}

/// A piece on the board: the single fugitive or one specific pursuer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Piece {
    Fugitive,
    Pursuer(PursuerId),
}

impl Piece {
    /// Is this the fugitive piece?
    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, Piece::Fugitive)
    }

    /// Is this a pursuer piece?
    #[must_use]
    pub const fn is_pursuer(self) -> bool {
        matches!(self, Piece::Pursuer(_))
    }

    /// The pursuer ID, if this is a pursuer piece.
    #[must_use]
    pub const fn pursuer_id(self) -> Option<PursuerId> {
        match self {
            Piece::Fugitive => None,
            Piece::Pursuer(id) => Some(id),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Fugitive => write!(f, "Fugitive"),
            Piece::Pursuer(id) => write!(f, "{}", id),
        }
    }
}
