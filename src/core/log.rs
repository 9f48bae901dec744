//! Travel log entries for the fugitive's moves.
//!
//! One entry is appended per leg of a fugitive turn: an elementary move
//! contributes one entry, a compound move two, in order. On rounds the
//! schedule designates as reveal rounds the entry records the real
//! destination; otherwise only the ticket kind is written.

use serde::{Deserialize, Serialize};

use super::ticket::Ticket;
use crate::board::Location;

/// One entry in the fugitive's travel log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogEntry {
    /// Ticket kind only; the destination is withheld.
    Hidden(Ticket),
    /// Ticket kind plus the revealed destination.
    Revealed(Ticket, Location),
}

impl LogEntry {
    /// Build a concealing entry.
    #[must_use]
    pub const fn hidden(ticket: Ticket) -> Self {
        LogEntry::Hidden(ticket)
    }

    /// Build a revealing entry.
    #[must_use]
    pub const fn revealed(ticket: Ticket, destination: Location) -> Self {
        LogEntry::Revealed(ticket, destination)
    }

    /// The ticket spent on this leg.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        match self {
            LogEntry::Hidden(t) | LogEntry::Revealed(t, _) => *t,
        }
    }

    /// The destination, if this entry revealed it.
    #[must_use]
    pub const fn revealed_location(&self) -> Option<Location> {
        match self {
            LogEntry::Hidden(_) => None,
            LogEntry::Revealed(_, loc) => Some(*loc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_entry() {
        let entry = LogEntry::hidden(Ticket::Bus);
        assert_eq!(entry.ticket(), Ticket::Bus);
        assert_eq!(entry.revealed_location(), None);
    }

    #[test]
    fn test_revealed_entry() {
        let entry = LogEntry::revealed(Ticket::Secret, Location::new(42));
        assert_eq!(entry.ticket(), Ticket::Secret);
        assert_eq!(entry.revealed_location(), Some(Location::new(42)));
    }

    #[test]
    fn test_serialization() {
        let entry = LogEntry::revealed(Ticket::Taxi, Location::new(7));
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
