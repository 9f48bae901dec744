//! The game state engine.
//!
//! A `GameState` is a fully-resolved point-in-time game. Construction
//! runs a strict pipeline — validate the configuration, generate the
//! legal moves for whichever side is to act, evaluate the win conditions,
//! clear the moves if the game is over — so a state is never in a
//! half-computed condition and nothing is recomputed lazily.
//!
//! States are immutable. `advance` derives a brand-new state from the
//! previous one plus a chosen move; old states remain valid read-only
//! snapshots. Persistent collections (`im`) keep those snapshots cheap.

use std::sync::Arc;

use im::{HashSet as ImHashSet, Vector};
use log::debug;

use crate::board::Location;
use crate::core::{GameSetup, LogEntry, Piece, Player, PursuerId, Ticket, TicketBook};
use crate::error::{ConfigError, GameError};
use crate::moves::Move;
use crate::rules::{available_moves, determine_winner};

/// A point-in-time game: setup, players, travel log, and the derived
/// legal-move and winner sets.
#[derive(Clone, Debug)]
pub struct GameState {
    setup: Arc<GameSetup>,
    fugitive: Player,
    pursuers: Vec<Player>,
    remaining: ImHashSet<Piece>,
    log: Vector<LogEntry>,
    moves: ImHashSet<Move>,
    winner: ImHashSet<Piece>,
}

impl GameState {
    /// Build the initial state of a game.
    ///
    /// The fugitive acts first: `remaining` starts as the fugitive's
    /// piece alone and the travel log starts empty.
    ///
    /// # Errors
    ///
    /// `GameError::Config` when any construction invariant is violated.
    pub fn start(
        setup: GameSetup,
        fugitive: Player,
        pursuers: Vec<Player>,
    ) -> Result<Self, GameError> {
        Self::resolve(
            Arc::new(setup),
            ImHashSet::unit(Piece::Fugitive),
            Vector::new(),
            fugitive,
            pursuers,
        )
    }

    /// The construction pipeline shared by `start` and `advance`:
    /// validate, generate moves, evaluate the winner, clear the moves for
    /// a terminal state.
    fn resolve(
        setup: Arc<GameSetup>,
        remaining: ImHashSet<Piece>,
        log: Vector<LogEntry>,
        fugitive: Player,
        pursuers: Vec<Player>,
    ) -> Result<Self, GameError> {
        check_config(&setup, &fugitive, &pursuers)?;
        debug_assert!(
            remaining
                .iter()
                .all(|piece| piece.is_fugitive() || pursuers.iter().any(|p| p.piece() == *piece)),
            "remaining contains a piece not in the game"
        );

        let mut moves = available_moves(&setup, &fugitive, &pursuers, &remaining, log.len());
        let winner = determine_winner(
            &fugitive,
            &pursuers,
            &remaining,
            log.len(),
            setup.round_count(),
            &moves,
        );
        if !winner.is_empty() {
            debug!("game over after {} logged legs: {:?} wins", log.len(), winner);
            moves = ImHashSet::new();
        }

        Ok(Self {
            setup,
            fugitive,
            pursuers,
            remaining,
            log,
            moves,
            winner,
        })
    }

    /// Apply a chosen move and return the resulting state.
    ///
    /// The receiver is never touched: rejection happens before any data
    /// is copied, and acceptance builds a fresh, fully-resolved state.
    ///
    /// # Errors
    ///
    /// `GameError::IllegalMove` when `mv` is not in the current
    /// legal-move set — including any move submitted against a terminal
    /// state, whose legal-move set is empty.
    pub fn advance(&self, mv: &Move) -> Result<GameState, GameError> {
        if !self.moves.contains(mv) {
            return Err(GameError::IllegalMove(*mv));
        }

        let mut remaining = self.remaining.without(&mv.piece());
        let mut log = self.log.clone();
        let mut fugitive = self.fugitive;
        let mut pursuers = self.pursuers.clone();

        match mv.piece() {
            Piece::Fugitive => {
                fugitive = fugitive.at(mv.destination()).spend(mv.tickets());

                // The round index for each leg is the log length before
                // that leg's entry is appended.
                for (ticket, destination) in mv.legs() {
                    let entry = if self.setup.is_reveal_round(log.len()) {
                        LogEntry::revealed(ticket, destination)
                    } else {
                        LogEntry::hidden(ticket)
                    };
                    log.push_back(entry);
                }

                // A pursuer with no tickets left can never act again; it
                // is skipped in every future round.
                remaining = pursuers
                    .iter()
                    .filter(|p| !p.tickets().is_empty())
                    .map(|p| p.piece())
                    .collect();
            }
            Piece::Pursuer(_) => {
                let Move::Single(sm) = mv else {
                    // Compound moves are fugitive-only; enumeration never
                    // produces one for a pursuer.
                    return Err(GameError::IllegalMove(*mv));
                };

                for p in &mut pursuers {
                    if p.piece() == sm.piece {
                        *p = p.at(sm.destination).spend([sm.ticket]);
                        // Spent pursuer tickets flow back to the fugitive.
                        fugitive = fugitive.grant(sm.ticket);
                        break;
                    }
                }

                // Every pursuer has played: the round advances and the
                // fugitive acts again.
                if remaining.is_empty() {
                    remaining = ImHashSet::unit(Piece::Fugitive);
                }
            }
        }

        Self::resolve(Arc::clone(&self.setup), remaining, log, fugitive, pursuers)
    }

    // === Queries ===

    /// The immutable setup this game runs on.
    #[must_use]
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// Every piece in the game.
    #[must_use]
    pub fn pieces(&self) -> ImHashSet<Piece> {
        let mut pieces: ImHashSet<Piece> = self.pursuers.iter().map(Player::piece).collect();
        pieces.insert(Piece::Fugitive);
        pieces
    }

    /// A pursuer's current location, `None` for an unknown pursuer.
    #[must_use]
    pub fn pursuer_location(&self, id: PursuerId) -> Option<Location> {
        self.pursuers
            .iter()
            .find(|p| p.piece() == Piece::Pursuer(id))
            .map(Player::location)
    }

    /// A piece's ticket counts, `None` for an unknown piece.
    #[must_use]
    pub fn tickets(&self, piece: Piece) -> Option<&TicketBook> {
        match piece {
            Piece::Fugitive => Some(self.fugitive.tickets()),
            Piece::Pursuer(_) => self
                .pursuers
                .iter()
                .find(|p| p.piece() == piece)
                .map(Player::tickets),
        }
    }

    /// The fugitive's travel log so far, ordered and append-only across
    /// the game's history.
    #[must_use]
    pub fn travel_log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    /// The winning side's pieces; empty while the game is ongoing.
    #[must_use]
    pub fn winner(&self) -> &ImHashSet<Piece> {
        &self.winner
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.winner.is_empty()
    }

    /// The currently legal moves. Empty exactly when the game is over or
    /// (transiently, never observable here) nobody is left to act.
    #[must_use]
    pub fn available_moves(&self) -> &ImHashSet<Move> {
        &self.moves
    }

    /// The pieces still entitled to act in the current round.
    #[must_use]
    pub fn remaining(&self) -> &ImHashSet<Piece> {
        &self.remaining
    }
}

/// Check every construction invariant, first violation wins.
fn check_config(
    setup: &GameSetup,
    fugitive: &Player,
    pursuers: &[Player],
) -> Result<(), ConfigError> {
    if setup.schedule.is_empty() {
        return Err(ConfigError::EmptySchedule);
    }
    if setup.graph.is_empty() {
        return Err(ConfigError::EmptyGraph);
    }
    if !fugitive.piece().is_fugitive() {
        return Err(ConfigError::NotFugitive(fugitive.piece()));
    }
    if pursuers.is_empty() {
        return Err(ConfigError::NoPursuers);
    }

    for (i, p) in pursuers.iter().enumerate() {
        if !p.piece().is_pursuer() {
            return Err(ConfigError::NotPursuer(p.piece()));
        }
        for ticket in [Ticket::Secret, Ticket::Double] {
            let count = p.tickets().count(ticket);
            if count > 0 {
                return Err(ConfigError::ForbiddenTicket {
                    piece: p.piece(),
                    ticket,
                    count,
                });
            }
        }
        for other in &pursuers[i + 1..] {
            if other.piece() == p.piece() {
                return Err(ConfigError::DuplicatePursuer(p.piece()));
            }
            if other.location() == p.location() {
                return Err(ConfigError::SharedLocation {
                    first: p.piece(),
                    second: other.piece(),
                    location: p.location(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardGraph, Transport};
    use crate::moves::SingleMove;

    fn small_graph() -> BoardGraph {
        // 1 - 2 - 3 - 4 taxi path
        let mut graph = BoardGraph::new();
        graph.add_edge(Location::new(1), Location::new(2), [Transport::Taxi]);
        graph.add_edge(Location::new(2), Location::new(3), [Transport::Taxi]);
        graph.add_edge(Location::new(3), Location::new(4), [Transport::Taxi]);
        graph
    }

    fn fugitive_at(location: u16, tickets: TicketBook) -> Player {
        Player::new(Piece::Fugitive, Location::new(location), tickets)
    }

    fn pursuer_at(id: u8, location: u16, tickets: TicketBook) -> Player {
        Player::new(Piece::Pursuer(PursuerId::new(id)), Location::new(location), tickets)
    }

    fn start_state() -> GameState {
        GameState::start(
            GameSetup::new(small_graph(), vec![false, true, false]),
            fugitive_at(1, TicketBook::new().with(Ticket::Taxi, 4)),
            vec![pursuer_at(0, 4, TicketBook::new().with(Ticket::Taxi, 4))],
        )
        .unwrap()
    }

    #[test]
    fn test_start_state_shape() {
        let state = start_state();

        assert_eq!(state.remaining(), &ImHashSet::unit(Piece::Fugitive));
        assert!(state.travel_log().is_empty());
        assert!(state.winner().is_empty());
        assert!(!state.is_over());
        assert!(!state.available_moves().is_empty());
    }

    #[test]
    fn test_empty_schedule_rejected() {
        let result = GameState::start(
            GameSetup::new(small_graph(), vec![]),
            fugitive_at(1, TicketBook::new()),
            vec![pursuer_at(0, 4, TicketBook::new().with(Ticket::Taxi, 1))],
        );
        assert_eq!(result.unwrap_err(), GameError::Config(ConfigError::EmptySchedule));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let result = GameState::start(
            GameSetup::new(BoardGraph::new(), vec![false]),
            fugitive_at(1, TicketBook::new()),
            vec![pursuer_at(0, 4, TicketBook::new().with(Ticket::Taxi, 1))],
        );
        assert_eq!(result.unwrap_err(), GameError::Config(ConfigError::EmptyGraph));
    }

    #[test]
    fn test_fugitive_in_pursuer_list_rejected() {
        let result = GameState::start(
            GameSetup::new(small_graph(), vec![false]),
            fugitive_at(1, TicketBook::new()),
            vec![fugitive_at(4, TicketBook::new())],
        );
        assert_eq!(
            result.unwrap_err(),
            GameError::Config(ConfigError::NotPursuer(Piece::Fugitive))
        );
    }

    #[test]
    fn test_pursuer_as_fugitive_rejected() {
        let result = GameState::start(
            GameSetup::new(small_graph(), vec![false]),
            pursuer_at(0, 1, TicketBook::new()),
            vec![pursuer_at(1, 4, TicketBook::new().with(Ticket::Taxi, 1))],
        );
        assert_eq!(
            result.unwrap_err(),
            GameError::Config(ConfigError::NotFugitive(Piece::Pursuer(PursuerId::new(0))))
        );
    }

    #[test]
    fn test_no_pursuers_rejected() {
        let result = GameState::start(
            GameSetup::new(small_graph(), vec![false]),
            fugitive_at(1, TicketBook::new()),
            vec![],
        );
        assert_eq!(result.unwrap_err(), GameError::Config(ConfigError::NoPursuers));
    }

    #[test]
    fn test_pursuer_forbidden_tickets_rejected() {
        for ticket in [Ticket::Secret, Ticket::Double] {
            let result = GameState::start(
                GameSetup::new(small_graph(), vec![false]),
                fugitive_at(1, TicketBook::new()),
                vec![pursuer_at(0, 4, TicketBook::new().with(ticket, 1))],
            );
            assert_eq!(
                result.unwrap_err(),
                GameError::Config(ConfigError::ForbiddenTicket {
                    piece: Piece::Pursuer(PursuerId::new(0)),
                    ticket,
                    count: 1,
                })
            );
        }
    }

    #[test]
    fn test_duplicate_pursuer_rejected() {
        let result = GameState::start(
            GameSetup::new(small_graph(), vec![false]),
            fugitive_at(1, TicketBook::new()),
            vec![
                pursuer_at(0, 3, TicketBook::new().with(Ticket::Taxi, 1)),
                pursuer_at(0, 4, TicketBook::new().with(Ticket::Taxi, 1)),
            ],
        );
        assert_eq!(
            result.unwrap_err(),
            GameError::Config(ConfigError::DuplicatePursuer(Piece::Pursuer(PursuerId::new(0))))
        );
    }

    #[test]
    fn test_shared_pursuer_location_rejected() {
        let result = GameState::start(
            GameSetup::new(small_graph(), vec![false]),
            fugitive_at(1, TicketBook::new()),
            vec![
                pursuer_at(0, 4, TicketBook::new().with(Ticket::Taxi, 1)),
                pursuer_at(1, 4, TicketBook::new().with(Ticket::Taxi, 1)),
            ],
        );
        assert_eq!(
            result.unwrap_err(),
            GameError::Config(ConfigError::SharedLocation {
                first: Piece::Pursuer(PursuerId::new(0)),
                second: Piece::Pursuer(PursuerId::new(1)),
                location: Location::new(4),
            })
        );
    }

    #[test]
    fn test_illegal_move_rejected_and_state_untouched() {
        let state = start_state();
        let bogus = Move::Single(SingleMove::new(
            Piece::Fugitive,
            Location::new(1),
            Ticket::Bus,
            Location::new(2),
        ));

        let err = state.advance(&bogus).unwrap_err();
        assert_eq!(err, GameError::IllegalMove(bogus));

        // The prior state stays valid and usable.
        assert!(!state.available_moves().is_empty());
        let legal = state.available_moves().iter().next().unwrap().clone();
        assert!(state.advance(&legal).is_ok());
    }

    #[test]
    fn test_queries() {
        let state = start_state();

        assert_eq!(state.pieces().len(), 2);
        assert_eq!(state.pursuer_location(PursuerId::new(0)), Some(Location::new(4)));
        assert_eq!(state.pursuer_location(PursuerId::new(9)), None);
        assert_eq!(state.tickets(Piece::Fugitive).unwrap().count(Ticket::Taxi), 4);
        assert_eq!(state.tickets(Piece::Pursuer(PursuerId::new(9))), None);
        assert_eq!(state.setup().round_count(), 3);
    }
}
