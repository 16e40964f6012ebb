//! Parameter structures for planner operations.
//!
//! These structures are shared by every interface (the CLI today) and carry no
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`:
//!
//! ```text
//! CLI Args (clap) ──From──▶ Core Params ──▶ EventPlanner
//! ```
//!
//! Dates and times arrive as the raw `YYYY-MM-DD` / `HH:MM` strings the user
//! typed; the planner validates them before mutating anything.

use serde::{Deserialize, Serialize};

use crate::models::EventId;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the event to operate on
    pub id: EventId,
}

/// Parameters for creating an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Name of the event
    pub name: String,
    /// Start date, `YYYY-MM-DD`
    pub date: String,
    /// Start time, `HH:MM` (24-hour)
    pub time: String,
    /// Where it happens
    #[serde(default)]
    pub location: String,
    /// Free-form notes
    #[serde(default)]
    pub description: String,
    /// Comma-separated attendee names
    #[serde(default)]
    pub attendees: String,
    /// Queue the event for reminders
    #[serde(default)]
    pub reminder: bool,
}

/// Partial update of an event. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    /// New start date, `YYYY-MM-DD`
    pub date: Option<String>,
    /// New start time, `HH:MM`
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub attendees: Option<String>,
    pub reminder: Option<bool>,
}

impl UpdateEvent {
    /// Whether any field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.attendees.is_none()
            && self.reminder.is_none()
    }
}

/// Identifies a task by its event and description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRef {
    /// Event the task belongs to
    pub event_id: EventId,
    /// Exact task description; the first match is used
    pub description: String,
}

/// Parameters for listing events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewEvents {
    /// Upcoming (start >= now) when true, past (start < now) otherwise
    pub upcoming: bool,
}

impl Default for ViewEvents {
    fn default() -> Self {
        Self { upcoming: true }
    }
}
