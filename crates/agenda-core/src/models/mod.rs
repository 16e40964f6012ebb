//! Data models for events, tasks and planner outcomes.
//!
//! These are the values the planner hands back to callers. Display
//! implementations live in [`crate::display`] so that formatting stays out of
//! the model definitions.
//!
//! # Examples
//!
//! ```rust
//! use agenda_core::models::{schedule, Event};
//!
//! let when = schedule::parse_schedule("2025-07-10", "14:00").unwrap();
//! let event = Event {
//!     id: 1,
//!     name: "Team sync".to_string(),
//!     date: when.date(),
//!     time: when.time(),
//!     location: "Room 4".to_string(),
//!     description: String::new(),
//!     attendees: "Alice, Bob".to_string(),
//!     reminder: true,
//! };
//! assert_eq!(event.starts_at(), when);
//! assert_eq!(event.attendee_list(), vec!["Alice", "Bob"]);
//! ```

pub mod event;
pub mod outcome;
pub mod report;
pub mod schedule;
pub mod snapshot;
pub mod task;

// Re-export all public types at the models level
pub use event::{Event, EventId};
pub use outcome::{ReminderScan, Undo};
pub use report::{Report, StructureActivity};
pub use snapshot::{EditKind, Snapshot};
pub use task::Task;
