//! Event model definition.

use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the planner. Never reused within a planner's
/// lifetime.
pub type EventId = u64;

/// A scheduled event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Unique identifier for the event
    pub id: EventId,

    /// Short name of the event
    pub name: String,

    /// Calendar date the event starts on
    pub date: Date,

    /// Local time of day the event starts at
    pub time: Time,

    /// Where the event takes place
    #[serde(default)]
    pub location: String,

    /// Free-form notes
    #[serde(default)]
    pub description: String,

    /// Comma-separated attendee names
    #[serde(default)]
    pub attendees: String,

    /// Whether the event sits in the reminder queue
    pub reminder: bool,
}

impl Event {
    /// The composite (date, time) key the chronological index orders by.
    pub fn starts_at(&self) -> DateTime {
        self.date.to_datetime(self.time)
    }

    /// Attendee names split on commas, trimmed, blanks dropped.
    pub fn attendee_list(&self) -> Vec<&str> {
        self.attendees
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}
