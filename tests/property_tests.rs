//! Algebraic properties of the engine, checked over randomized playouts.
//!
//! Every walk starts from a freshly dealt compact game and submits only
//! enumerated moves, so these properties hold for every reachable state,
//! not just hand-built ones.

use proptest::prelude::*;
use proptest::sample::Index;

use rust_pursuit::games::compact::CompactGameBuilder;
use rust_pursuit::{GameState, Move, Ticket};

/// Total count of one ticket kind across the fugitive and all pursuers.
fn total_in_play(state: &GameState, ticket: Ticket) -> u32 {
    state
        .pieces()
        .iter()
        .map(|&piece| state.tickets(piece).map_or(0, |book| book.count(ticket)))
        .sum()
}

fn sorted_moves(state: &GameState) -> Vec<Move> {
    let mut moves: Vec<Move> = state.available_moves().iter().cloned().collect();
    moves.sort();
    moves
}

proptest! {
    /// Walk a game with arbitrary choices; every intermediate state must
    /// satisfy the structural invariants.
    #[test]
    fn invariants_hold_along_any_playout(
        seed in any::<u64>(),
        choices in proptest::collection::vec(any::<Index>(), 0..60),
    ) {
        let mut state = CompactGameBuilder::new().pursuers(3).build(seed).unwrap();

        for choice in &choices {
            if state.is_over() {
                break;
            }
            let moves = sorted_moves(&state);
            // A non-terminal state always offers at least one move.
            prop_assert!(!moves.is_empty());

            let mv = moves[choice.index(moves.len())];
            let before: Vec<u32> = Ticket::ALL
                .iter()
                .map(|&t| total_in_play(&state, t))
                .collect();

            let next = state.advance(&mv).unwrap();

            // Terminal invariant: a winner forces an empty move set.
            if !next.winner().is_empty() {
                prop_assert!(next.available_moves().is_empty());
            }

            // No two pursuers ever share a location (construction would
            // have failed otherwise, but check the reachable surface).
            let mut locations: Vec<_> = next
                .pieces()
                .iter()
                .filter_map(|p| p.pursuer_id())
                .filter_map(|id| next.pursuer_location(id))
                .collect();
            locations.sort();
            let len = locations.len();
            locations.dedup();
            prop_assert_eq!(locations.len(), len);

            // Log length is bounded by two legs per scheduled round.
            prop_assert!(next.travel_log().len() <= 2 * next.setup().round_count());

            // Ticket conservation: pursuer moves recycle to the fugitive,
            // fugitive moves strictly consume.
            let after: Vec<u32> = Ticket::ALL
                .iter()
                .map(|&t| total_in_play(&next, t))
                .collect();
            if mv.piece().is_pursuer() {
                prop_assert_eq!(&before, &after);
            } else {
                let spent = mv.tickets().len() as u32;
                let before_sum: u32 = before.iter().sum();
                let after_sum: u32 = after.iter().sum();
                prop_assert_eq!(after_sum, before_sum - spent);
            }

            state = next;
        }
    }

    /// Every enumerated move, applied to the state that enumerated it,
    /// produces a valid next state.
    #[test]
    fn move_set_is_closed_under_advance(
        seed in any::<u64>(),
        choices in proptest::collection::vec(any::<Index>(), 0..8),
    ) {
        let mut state = CompactGameBuilder::new().pursuers(2).build(seed).unwrap();

        for choice in &choices {
            if state.is_over() {
                break;
            }
            for mv in state.available_moves() {
                prop_assert!(state.advance(mv).is_ok(), "enumerated move rejected: {}", mv);
            }
            let moves = sorted_moves(&state);
            state = state.advance(&moves[choice.index(moves.len())]).unwrap();
        }
    }

    /// Advance is a pure function of (state, move).
    #[test]
    fn advance_is_deterministic(
        seed in any::<u64>(),
        choice in any::<Index>(),
    ) {
        let state = CompactGameBuilder::new().pursuers(3).build(seed).unwrap();
        let moves = sorted_moves(&state);
        let mv = moves[choice.index(moves.len())];

        let a = state.advance(&mv).unwrap();
        let b = state.advance(&mv).unwrap();

        prop_assert_eq!(a.travel_log(), b.travel_log());
        prop_assert_eq!(a.remaining(), b.remaining());
        prop_assert_eq!(a.available_moves(), b.available_moves());
        prop_assert_eq!(a.winner(), b.winner());
        for piece in a.pieces() {
            prop_assert_eq!(a.tickets(piece), b.tickets(piece));
        }
    }
}
