//! The in-memory structures the planner keeps consistent with its event
//! store.
//!
//! - [`index`]: chronological binary search tree of event ids
//! - [`tasks`]: singly linked task list, one per event
//! - [`reminders`]: queue of ids with an active reminder
//! - [`history`]: bounded undo stack of event snapshots
//! - [`journal`]: record of operations on the four structures above
//!
//! None of these know about each other; [`crate::planner::EventPlanner`]
//! is the only place they are composed.

pub mod history;
pub mod index;
pub mod journal;
pub mod reminders;
pub mod tasks;

pub use history::UndoHistory;
pub use index::ChronoIndex;
pub use journal::{Journal, JournalEntry, Operation, Structure};
pub use reminders::ReminderQueue;
pub use tasks::TaskList;
