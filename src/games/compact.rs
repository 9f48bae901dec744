//! A compact, self-contained pursuit game.
//!
//! Twenty locations: an outer taxi ring (1-12), an inner taxi ring
//! (13-16) joined to the outer ring by spokes, four riverside stops
//! (17-20) on two underground lines, bus shortcuts, and two ferry
//! crossings. Compiled in as a static edge table — the engine never loads
//! boards from files.
//!
//! The builder deals non-overlapping starting positions from fixed start
//! lists with a seeded RNG, so the same seed always deals the same game.

use crate::board::{BoardGraph, Location, Transport};
use crate::core::{GameRng, GameSetup, Piece, Player, PursuerId, Ticket, TicketBook};
use crate::error::GameError;
use crate::state::GameState;

const TAXI_EDGES: &[(u16, u16)] = &[
    // outer ring
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (8, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (12, 1),
    // inner ring
    (13, 14),
    (14, 15),
    (15, 16),
    (16, 13),
    // spokes
    (1, 13),
    (4, 14),
    (7, 15),
    (10, 16),
    // riverside access
    (17, 13),
    (18, 14),
    (19, 15),
    (20, 16),
];

const BUS_EDGES: &[(u16, u16)] = &[(2, 5), (5, 8), (8, 11), (11, 2), (13, 15), (14, 16)];

const UNDERGROUND_EDGES: &[(u16, u16)] = &[(1, 17), (17, 19), (19, 7), (4, 18), (18, 20), (20, 10)];

const FERRY_EDGES: &[(u16, u16)] = &[(3, 18), (9, 20)];

/// Start cards for the fugitive. Disjoint from the pursuer list, so a
/// dealt game never begins captured.
const FUGITIVE_STARTS: &[u16] = &[5, 8, 13, 15, 18, 20];

/// Start cards for pursuers.
const PURSUER_STARTS: &[u16] = &[1, 3, 6, 9, 11, 14, 16];

/// The largest number of pursuers the start-card list can deal.
pub const MAX_PURSUERS: usize = PURSUER_STARTS.len();

/// Rounds in a compact game.
pub const ROUNDS: usize = 13;

/// The compact board.
#[must_use]
pub fn board() -> BoardGraph {
    let mut graph = BoardGraph::new();
    for &(a, b) in TAXI_EDGES {
        graph.add_edge(Location::new(a), Location::new(b), [Transport::Taxi]);
    }
    for &(a, b) in BUS_EDGES {
        graph.add_edge(Location::new(a), Location::new(b), [Transport::Bus]);
    }
    for &(a, b) in UNDERGROUND_EDGES {
        graph.add_edge(Location::new(a), Location::new(b), [Transport::Underground]);
    }
    for &(a, b) in FERRY_EDGES {
        graph.add_edge(Location::new(a), Location::new(b), [Transport::Ferry]);
    }
    graph
}

/// The compact reveal schedule: reveals on rounds 3, 8 and 13 (1-based).
#[must_use]
pub fn reveal_schedule() -> Vec<bool> {
    (1..=ROUNDS).map(|round| matches!(round, 3 | 8 | 13)).collect()
}

/// Builder for a compact game.
///
/// ## Example
///
/// ```
/// use rust_pursuit::games::compact::CompactGameBuilder;
///
/// let state = CompactGameBuilder::new().pursuers(3).build(42).unwrap();
/// assert_eq!(state.pieces().len(), 4);
/// ```
pub struct CompactGameBuilder {
    pursuer_count: usize,
}

impl Default for CompactGameBuilder {
    fn default() -> Self {
        Self { pursuer_count: 3 }
    }
}

impl CompactGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pursuers.
    ///
    /// # Panics
    ///
    /// Panics when `count` is zero or exceeds `MAX_PURSUERS`.
    #[must_use]
    pub fn pursuers(mut self, count: usize) -> Self {
        assert!(
            (1..=MAX_PURSUERS).contains(&count),
            "Pursuer count must be 1-{}",
            MAX_PURSUERS
        );
        self.pursuer_count = count;
        self
    }

    /// Deal starting positions and build the initial state.
    ///
    /// Classic ticket allocation: each pursuer gets 10 taxi, 8 bus and 4
    /// underground tickets; the fugitive gets 4 taxi, 3 bus, 3
    /// underground, one secret ticket per pursuer, and 2 double tickets.
    ///
    /// # Errors
    ///
    /// `GameError::Config` if the dealt configuration is invalid; the
    /// fixed start lists make this unreachable in practice.
    pub fn build(self, seed: u64) -> Result<GameState, GameError> {
        let mut rng = GameRng::new(seed);

        let mut pursuer_starts: Vec<u16> = PURSUER_STARTS.to_vec();
        rng.shuffle(&mut pursuer_starts);
        let fugitive_start = FUGITIVE_STARTS[rng.gen_range_usize(0..FUGITIVE_STARTS.len())];

        let fugitive_tickets = TicketBook::new()
            .with(Ticket::Taxi, 4)
            .with(Ticket::Bus, 3)
            .with(Ticket::Underground, 3)
            .with(Ticket::Secret, self.pursuer_count as u32)
            .with(Ticket::Double, 2);
        let pursuer_tickets = TicketBook::new()
            .with(Ticket::Taxi, 10)
            .with(Ticket::Bus, 8)
            .with(Ticket::Underground, 4);

        let fugitive = Player::new(
            Piece::Fugitive,
            Location::new(fugitive_start),
            fugitive_tickets,
        );
        let pursuers = pursuer_starts
            .iter()
            .take(self.pursuer_count)
            .enumerate()
            .map(|(i, &start)| {
                Player::new(
                    Piece::Pursuer(PursuerId::new(i as u8)),
                    Location::new(start),
                    pursuer_tickets,
                )
            })
            .collect();

        GameState::start(
            GameSetup::new(board(), reveal_schedule()),
            fugitive,
            pursuers,
        )
    }
}
