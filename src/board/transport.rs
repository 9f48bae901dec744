//! Transport modes carried by board edges.
//!
//! Every edge of the board is labeled with one or more transport modes.
//! Each mode maps to exactly one ticket kind a mover must spend to
//! traverse the edge by that mode. Ferry crossings are the fugitive's
//! privilege: they require a secret ticket, which pursuers never hold.

use serde::{Deserialize, Serialize};

use crate::core::Ticket;

/// A transport mode on a board edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    /// River crossing. Requires a secret ticket, so only the fugitive
    /// can ever take it.
    Ferry,
}

impl Transport {
    /// All transport modes, in declaration order.
    pub const ALL: [Transport; 4] = [
        Transport::Taxi,
        Transport::Bus,
        Transport::Underground,
        Transport::Ferry,
    ];

    /// The ticket kind a mover must spend to traverse an edge by this mode.
    #[must_use]
    pub const fn required_ticket(self) -> Ticket {
        match self {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transport::Taxi => "taxi",
            Transport::Bus => "bus",
            Transport::Underground => "underground",
            Transport::Ferry => "ferry",
        };
        write!(f, "{}", name)
    }
}
