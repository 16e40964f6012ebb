//! Storage contract the planner can be seeded from and persisted to.
//!
//! The planner performs no I/O. Callers load through
//! [`crate::EventPlanner::restore`] and write back what each operation
//! returned. [`crate::db::Database`] is the SQLite implementation.

use crate::{
    error::Result,
    models::{Event, EventId},
    structures::TaskList,
};

/// Durable store of events and their task lists.
pub trait Persistence {
    /// Every stored event, in any order.
    fn load_all_events(&self) -> Result<Vec<Event>>;

    /// Tasks of one event in insertion order; empty when it has none.
    fn load_tasks_for_event(&self, event_id: EventId) -> Result<TaskList>;

    /// Inserts or replaces an event by id.
    fn save_event(&mut self, event: &Event) -> Result<()>;

    /// Replaces the whole task list of an event.
    fn save_tasks_for_event(&mut self, event_id: EventId, tasks: &TaskList) -> Result<()>;

    /// Removes an event and its tasks. Unknown ids are not an error.
    fn delete_event(&mut self, event_id: EventId) -> Result<()>;
}
