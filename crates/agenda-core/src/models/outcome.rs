//! Values returned by planner operations that callers act on.

use serde::{Deserialize, Serialize};

use super::Event;

/// What an undo did, so the caller knows what to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "event", rename_all = "lowercase")]
pub enum Undo {
    /// An update was reverted; the event now holds its previous fields.
    Reverted(Event),

    /// A creation was undone; the event is gone from every structure.
    Removed(Event),
}

impl Undo {
    /// The event the undo acted on.
    pub fn event(&self) -> &Event {
        match self {
            Undo::Reverted(event) | Undo::Removed(event) => event,
        }
    }
}

/// Result of one pass over the reminder queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderScan {
    /// Events whose start lies beyond the grace period; they were dequeued.
    pub past_due: Vec<Event>,

    /// Events inside the due-soon window. Reported again on every scan that
    /// still falls inside the window.
    pub due_soon: Vec<Event>,
}

impl ReminderScan {
    pub fn is_empty(&self) -> bool {
        self.past_due.is_empty() && self.due_soon.is_empty()
    }
}
