//! Win-condition evaluation.
//!
//! Evaluated once per freshly constructed state, in a fixed priority
//! order; the order resolves simultaneous-condition ties such as a
//! last-round capture versus timeout.

use crate::core::{Piece, Player};
use crate::moves::Move;

fn pursuer_pieces(pursuers: &[Player]) -> im::HashSet<Piece> {
    pursuers.iter().map(Player::piece).collect()
}

/// Decide whether any side has already won.
///
/// Checks, first match wins:
/// 1. capture — a pursuer shares the fugitive's location;
/// 2. pursuer exhaustion — no pursuer holds any ticket;
/// 3. timeout — the schedule is fully logged and the fugitive is to act;
/// 4. fugitive stalemate — fugitive to act with no legal move;
/// 5. pursuer stalemate — pursuers to act with no pursuer-authored move.
///
/// An empty result means the game is still ongoing.
#[must_use]
pub fn determine_winner(
    fugitive: &Player,
    pursuers: &[Player],
    remaining: &im::HashSet<Piece>,
    log_len: usize,
    round_count: usize,
    moves: &im::HashSet<Move>,
) -> im::HashSet<Piece> {
    if pursuers.iter().any(|p| p.location() == fugitive.location()) {
        return pursuer_pieces(pursuers);
    }

    if pursuers.iter().all(|p| p.tickets().is_empty()) {
        return im::HashSet::unit(Piece::Fugitive);
    }

    let fugitive_to_act = remaining.contains(&Piece::Fugitive);

    if log_len == round_count && fugitive_to_act {
        return im::HashSet::unit(Piece::Fugitive);
    }

    if fugitive_to_act {
        if moves.is_empty() {
            return pursuer_pieces(pursuers);
        }
    } else if !moves.iter().any(|m| m.piece().is_pursuer()) {
        return im::HashSet::unit(Piece::Fugitive);
    }

    im::HashSet::new()
}
