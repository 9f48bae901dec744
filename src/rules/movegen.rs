//! Legal-move enumeration.
//!
//! Elementary moves are enumerated per mover from the board adjacency;
//! compound fugitive moves are composed from pairs of elementary moves.
//! Results are sets keyed by full move identity, so an edge whose modes
//! map to the same ticket kind collapses to one move.

use rustc_hash::FxHashSet;

use crate::board::{BoardGraph, Location};
use crate::core::{GameSetup, Piece, Player, Ticket};
use crate::moves::{DoubleMove, Move, SingleMove};

/// Enumerate the elementary moves available to `mover` from `source`.
///
/// A destination occupied by any pursuer is skipped — pursuers block all
/// movers from landing on them. One move is emitted per edge mode whose
/// required ticket the mover holds; a fugitive holding a secret ticket
/// additionally gets a secret move to every adjacent destination,
/// independent of which modes the edge carries.
#[must_use]
pub fn single_moves(
    graph: &BoardGraph,
    pursuers: &[Player],
    mover: &Player,
    source: Location,
) -> FxHashSet<SingleMove> {
    let mut moves = FxHashSet::default();

    for (destination, modes) in graph.adjacent(source) {
        if pursuers.iter().any(|p| p.location() == destination) {
            continue;
        }

        for mode in modes {
            let ticket = mode.required_ticket();
            if mover.has(ticket) {
                moves.insert(SingleMove::new(mover.piece(), source, ticket, destination));
            }
        }

        // A secret move is legal on any edge that exists at all.
        if mover.piece().is_fugitive() && mover.has(Ticket::Secret) {
            moves.insert(SingleMove::new(mover.piece(), source, Ticket::Secret, destination));
        }
    }

    moves
}

/// Enumerate every legal move for the side whose turn it is.
///
/// Fugitive's turn: its elementary moves, plus compound moves when it
/// holds a double ticket and at least two rounds remain beyond the moves
/// already logged. Two legs spending the same ticket kind require two
/// tickets of that kind — one ticket cannot cover both legs.
///
/// Pursuers' turn: the union of elementary moves over every pursuer still
/// to act. A pursuer with no legal move simply contributes none.
#[must_use]
pub fn available_moves(
    setup: &GameSetup,
    fugitive: &Player,
    pursuers: &[Player],
    remaining: &im::HashSet<Piece>,
    log_len: usize,
) -> im::HashSet<Move> {
    let mut moves = im::HashSet::new();

    if remaining.contains(&Piece::Fugitive) {
        let singles = single_moves(&setup.graph, pursuers, fugitive, fugitive.location());
        let can_double = fugitive.has(Ticket::Double) && setup.round_count() >= log_len + 2;

        for first in &singles {
            if can_double {
                for second in single_moves(&setup.graph, pursuers, fugitive, first.destination) {
                    if first.ticket != second.ticket || fugitive.has_at_least(first.ticket, 2) {
                        moves.insert(Move::Double(DoubleMove::new(
                            first.source,
                            first.ticket,
                            first.destination,
                            second.ticket,
                            second.destination,
                        )));
                    }
                }
            }
            moves.insert(Move::Single(*first));
        }
    } else {
        for pursuer in pursuers {
            if !remaining.contains(&pursuer.piece()) {
                continue;
            }
            for m in single_moves(&setup.graph, pursuers, pursuer, pursuer.location()) {
                moves.insert(Move::Single(m));
            }
        }
    }

    moves
}
