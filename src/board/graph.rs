//! The board graph: locations joined by multi-mode edges.
//!
//! Nodes are opaque `Location` identifiers; each undirected edge carries
//! the set of transport modes available between its endpoints. The graph
//! is assembled once at setup and only ever queried afterwards — move
//! generation reads adjacency, nothing in the engine writes it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::transport::Transport;

/// Identifier for a board location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location(pub u16);

impl Location {
    /// Create a new location ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

/// The set of transport modes on one edge.
///
/// Edges rarely carry more than two modes, so the set lives inline.
pub type ModeSet = SmallVec<[Transport; 2]>;

/// An undirected transport graph over board locations.
///
/// ## Usage
///
/// ```
/// use rust_pursuit::board::{BoardGraph, Location, Transport};
///
/// let mut graph = BoardGraph::new();
/// graph.add_edge(Location::new(1), Location::new(2), [Transport::Taxi]);
/// graph.add_edge(Location::new(2), Location::new(3), [Transport::Taxi, Transport::Bus]);
///
/// assert_eq!(graph.location_count(), 3);
/// assert_eq!(graph.adjacent(Location::new(2)).count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardGraph {
    /// location -> neighbour -> modes. Both directions of an edge are stored.
    adjacency: FxHashMap<Location, FxHashMap<Location, ModeSet>>,
}

impl BoardGraph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location without connecting it to anything.
    ///
    /// Locations mentioned in `add_edge` are registered implicitly; this
    /// exists for isolated nodes.
    pub fn add_location(&mut self, location: Location) {
        self.adjacency.entry(location).or_default();
    }

    /// Add an undirected edge between `a` and `b` with the given modes.
    ///
    /// Repeated insertion for the same pair merges the mode sets.
    pub fn add_edge(&mut self, a: Location, b: Location, modes: impl IntoIterator<Item = Transport>) {
        let modes: ModeSet = modes.into_iter().collect();
        for mode in &modes {
            let forward = self.adjacency.entry(a).or_default().entry(b).or_default();
            if !forward.contains(mode) {
                forward.push(*mode);
            }
            let backward = self.adjacency.entry(b).or_default().entry(a).or_default();
            if !backward.contains(mode) {
                backward.push(*mode);
            }
        }
        // An edge with no modes still registers both endpoints.
        self.add_location(a);
        self.add_location(b);
    }

    /// Does the graph contain this location?
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        self.adjacency.contains_key(&location)
    }

    /// Number of locations in the graph.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Is the graph empty (no locations at all)?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over the neighbours of `source` with the modes joining them.
    ///
    /// Yields nothing for an unknown location. No ordering guarantee.
    pub fn adjacent(&self, source: Location) -> impl Iterator<Item = (Location, &[Transport])> {
        self.adjacency
            .get(&source)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().map(|(loc, modes)| (*loc, modes.as_slice())))
    }

    /// The modes available between two locations, empty if not adjacent.
    #[must_use]
    pub fn transports(&self, a: Location, b: Location) -> &[Transport] {
        self.adjacency
            .get(&a)
            .and_then(|neighbours| neighbours.get(&b))
            .map_or(&[], |modes| modes.as_slice())
    }

    /// Iterate over all locations. No ordering guarantee.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.adjacency.keys().copied()
    }
}
