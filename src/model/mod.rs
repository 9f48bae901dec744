//! Observer wrapper around the state engine.
//!
//! `Model` owns the current `GameState` and a subscription list. Driver
//! code submits moves through `choose_move`; every registered observer is
//! notified once per event, in registration order, after the transition
//! has completed. Single control thread only — concurrent `choose_move`
//! calls must be serialized by the caller.

use log::debug;

use crate::core::{GameSetup, Player};
use crate::error::GameError;
use crate::moves::Move;
use crate::state::GameState;

/// What happened to the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// A move was applied and a new current state installed.
    MoveMade,
    /// The new current state is terminal.
    GameOver,
}

/// A subscriber to model changes.
pub trait Observer {
    /// Called once per event, after the state transition completes.
    fn on_model_changed(&self, state: &GameState, event: Event);
}

/// Handle for unregistering an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

/// The state engine behind a notify-on-change interface.
pub struct Model {
    state: GameState,
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u32,
}

impl Model {
    /// Build a model over a freshly started game.
    ///
    /// # Errors
    ///
    /// `GameError::Config` when the initial state is invalid.
    pub fn new(
        setup: GameSetup,
        fugitive: Player,
        pursuers: Vec<Player>,
    ) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::start(setup, fugitive, pursuers)?,
            observers: Vec::new(),
            next_id: 0,
        })
    }

    /// Wrap an already-constructed state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// The current board.
    #[must_use]
    pub fn current_board(&self) -> &GameState {
        &self.state
    }

    /// Subscribe an observer. Observers are notified in registration
    /// order.
    pub fn register(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unsubscribe an observer.
    ///
    /// Returns true if the observer was found and removed.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        if let Some(pos) = self.observers.iter().position(|(oid, _)| *oid == id) {
            self.observers.remove(pos);
            true
        } else {
            false
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Submit a chosen move.
    ///
    /// On success the resulting state becomes current, then observers are
    /// notified: `MoveMade` always, `GameOver` additionally when the new
    /// state is terminal. On error nothing changes and nobody is
    /// notified.
    ///
    /// # Errors
    ///
    /// `GameError::IllegalMove` when the move is not currently legal.
    pub fn choose_move(&mut self, mv: &Move) -> Result<(), GameError> {
        self.state = self.state.advance(mv)?;
        debug!("move applied: {}", mv);

        self.notify(Event::MoveMade);
        if self.state.is_over() {
            self.notify(Event::GameOver);
        }
        Ok(())
    }

    fn notify(&self, event: Event) {
        for (_, observer) in &self.observers {
            observer.on_model_changed(&self.state, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardGraph, Location, Transport};
    use crate::core::{Piece, PursuerId, Ticket, TicketBook};
    use crate::moves::SingleMove;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        events: Rc<RefCell<Vec<(Event, &'static str)>>>,
        name: &'static str,
    }

    impl Observer for Recorder {
        fn on_model_changed(&self, _state: &GameState, event: Event) {
            self.events.borrow_mut().push((event, self.name));
        }
    }

    fn test_model() -> Model {
        // 1 - 2 - 3 taxi path; fugitive at 1, pursuer at 3.
        let mut graph = BoardGraph::new();
        graph.add_edge(Location::new(1), Location::new(2), [Transport::Taxi]);
        graph.add_edge(Location::new(2), Location::new(3), [Transport::Taxi]);

        Model::new(
            GameSetup::new(graph, vec![false; 5]),
            Player::new(
                Piece::Fugitive,
                Location::new(1),
                TicketBook::new().with(Ticket::Taxi, 5),
            ),
            vec![Player::new(
                Piece::Pursuer(PursuerId::new(0)),
                Location::new(3),
                TicketBook::new().with(Ticket::Taxi, 5),
            )],
        )
        .unwrap()
    }

    fn fugitive_taxi_move() -> Move {
        Move::Single(SingleMove::new(
            Piece::Fugitive,
            Location::new(1),
            Ticket::Taxi,
            Location::new(2),
        ))
    }

    #[test]
    fn test_move_made_notification_in_registration_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut model = test_model();

        model.register(Box::new(Recorder {
            events: Rc::clone(&events),
            name: "first",
        }));
        model.register(Box::new(Recorder {
            events: Rc::clone(&events),
            name: "second",
        }));

        model.choose_move(&fugitive_taxi_move()).unwrap();

        let seen = events.borrow();
        assert_eq!(
            seen.as_slice(),
            &[(Event::MoveMade, "first"), (Event::MoveMade, "second")]
        );
    }

    #[test]
    fn test_game_over_notification() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut model = test_model();
        model.register(Box::new(Recorder {
            events: Rc::clone(&events),
            name: "watcher",
        }));

        // Fugitive steps to 2; pursuer captures by moving 3 -> 2.
        model.choose_move(&fugitive_taxi_move()).unwrap();
        model
            .choose_move(&Move::Single(SingleMove::new(
                Piece::Pursuer(PursuerId::new(0)),
                Location::new(3),
                Ticket::Taxi,
                Location::new(2),
            )))
            .unwrap();

        let seen = events.borrow();
        assert_eq!(
            seen.as_slice(),
            &[
                (Event::MoveMade, "watcher"),
                (Event::MoveMade, "watcher"),
                (Event::GameOver, "watcher"),
            ]
        );
        assert!(model.current_board().is_over());
    }

    #[test]
    fn test_unregister() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut model = test_model();

        let id = model.register(Box::new(Recorder {
            events: Rc::clone(&events),
            name: "gone",
        }));
        assert_eq!(model.observer_count(), 1);

        assert!(model.unregister(id));
        assert!(!model.unregister(id));
        assert_eq!(model.observer_count(), 0);

        model.choose_move(&fugitive_taxi_move()).unwrap();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_illegal_move_notifies_nobody() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut model = test_model();
        model.register(Box::new(Recorder {
            events: Rc::clone(&events),
            name: "watcher",
        }));

        let bogus = Move::Single(SingleMove::new(
            Piece::Fugitive,
            Location::new(1),
            Ticket::Bus,
            Location::new(2),
        ));
        assert!(model.choose_move(&bogus).is_err());
        assert!(events.borrow().is_empty());
    }
}
