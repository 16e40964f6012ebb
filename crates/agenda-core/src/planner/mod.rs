//! The event planner: one API over the event store and its structures.
//!
//! [`EventPlanner`] owns the canonical events and keeps four structures
//! consistent with them:
//!
//! ```text
//!                 ┌──────────────────────┐
//!   caller ──────▶│     EventPlanner     │
//!                 │  events: id → Event  │
//!                 └──────────┬───────────┘
//!        ┌───────────────┬───┴───────────┬────────────────┐
//!        ▼               ▼               ▼                ▼
//!   ChronoIndex      TaskList map   ReminderQueue    UndoHistory
//!  (start → id)     (id → tasks)     (ids, FIFO)   (bounded stack)
//! ```
//!
//! Every mutation runs store → index → queue → history in that order and
//! then returns what changed, so the caller can persist it. The planner never
//! performs I/O itself.
//!
//! ## Submodules
//!
//! - [`event_ops`]: create, update, delete and view events
//! - [`task_ops`]: per-event task lists
//! - [`reminder_ops`]: reminder scans and queue view
//! - [`history_ops`]: undo and the edit history view
//! - [`load`]: seeding from persistence without side effects
//! - [`report`]: activity statistics
//!
//! # Example
//!
//! ```rust
//! use agenda_core::{params::CreateEvent, EventPlanner};
//! use jiff::civil::date;
//!
//! let mut planner = EventPlanner::default();
//! let event = planner.create_event(&CreateEvent {
//!     name: "Launch".to_string(),
//!     date: "2025-07-10".to_string(),
//!     time: "14:00".to_string(),
//!     reminder: true,
//!     ..Default::default()
//! })?;
//!
//! let upcoming = planner.view_events(true, date(2025, 7, 1).at(0, 0, 0, 0))?;
//! assert_eq!(upcoming, vec![event]);
//! # Ok::<(), agenda_core::PlannerError>(())
//! ```

use std::collections::HashMap;

use jiff::civil::DateTime;
use log::{debug, error};

use crate::{
    config::{PlannerConfig, ReminderWindow},
    error::{PlannerError, Result},
    models::{Event, EventId, Snapshot},
    structures::{ChronoIndex, Journal, Operation, ReminderQueue, Structure, TaskList, UndoHistory},
};

pub mod event_ops;
pub mod history_ops;
pub mod load;
pub mod reminder_ops;
pub mod report;
pub mod task_ops;


/// In-memory event planner.
///
/// Not synchronised: hosts that share one planner across threads must guard
/// it with a mutex, since a mutation touches several structures in sequence.
#[derive(Debug, Clone)]
pub struct EventPlanner {
    events: HashMap<EventId, Event>,
    index: ChronoIndex,
    tasks: HashMap<EventId, TaskList>,
    reminders: ReminderQueue,
    history: UndoHistory,
    journal: Journal,
    window: ReminderWindow,
    next_id: EventId,
}

impl EventPlanner {
    /// Creates an empty planner whose first event gets id 1.
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_next_id(config, 1)
    }

    /// Creates an empty planner that assigns ids starting at `next_id`.
    pub fn with_next_id(config: PlannerConfig, next_id: EventId) -> Self {
        debug!("EventPlanner initialized with ID counter starting at {next_id}");
        Self {
            events: HashMap::new(),
            index: ChronoIndex::new(),
            tasks: HashMap::new(),
            reminders: ReminderQueue::new(),
            history: UndoHistory::with_capacity(config.history_capacity),
            journal: Journal::with_capacity(config.journal_capacity),
            window: config.reminders,
            next_id: next_id.max(1),
        }
    }

    /// Looks up an event by id.
    pub fn get_event(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    /// Number of events in the store.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The id the next created event will get.
    pub fn next_id(&self) -> EventId {
        self.next_id
    }

    /// Raises the id counter to at least `next_id`. Never lowers it.
    pub fn reserve_ids_below(&mut self, next_id: EventId) {
        self.next_id = self.next_id.max(next_id);
    }

    /// Record of structural operations, oldest first.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The undo history, for callers that persist it.
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    fn index_insert(&mut self, key: DateTime, id: EventId, operation: Operation) {
        self.index.insert(key, id);
        self.journal
            .record(Structure::Index, operation, format!("event {id} at {key}"));
    }

    fn index_remove(&mut self, key: DateTime, id: EventId) -> Result<()> {
        if self.index.remove(key, id) {
            self.journal
                .record(Structure::Index, Operation::Delete, format!("event {id} at {key}"));
            Ok(())
        } else {
            error!("Event {id} missing from chronological index under {key}");
            Err(PlannerError::inconsistent(
                id,
                format!("no index entry under {key}"),
            ))
        }
    }

    /// Re-evaluates queue membership: drops `id`, then re-appends it when
    /// `enabled`.
    fn requeue(&mut self, id: EventId, enabled: bool) {
        if self.reminders.remove(id) {
            self.journal
                .record(Structure::Queue, Operation::Dequeue, format!("event {id}"));
        }
        if enabled {
            self.enqueue(id);
        }
    }

    fn enqueue(&mut self, id: EventId) {
        if self.reminders.enqueue(id) {
            self.journal
                .record(Structure::Queue, Operation::Enqueue, format!("event {id}"));
        }
    }

    fn push_history(&mut self, snapshot: Snapshot) {
        let details = format!("{} of event {}", snapshot.kind.as_str(), snapshot.event.id);
        if let Some(evicted) = self.history.push(snapshot) {
            debug!(
                "Undo history full, dropped {} snapshot of event {}",
                evicted.kind.as_str(),
                evicted.event.id
            );
        }
        self.journal.record(Structure::History, Operation::Push, details);
    }

    /// Removes `id` from the index, store, task map and queue.
    fn purge(&mut self, id: EventId) -> Result<Option<Event>> {
        let Some(key) = self.events.get(&id).map(Event::starts_at) else {
            return Ok(None);
        };
        self.index_remove(key, id)?;
        let event = self
            .events
            .remove(&id)
            .ok_or_else(|| PlannerError::inconsistent(id, "vanished from the store"))?;
        if self.tasks.remove(&id).is_some() {
            self.journal
                .record(Structure::TaskList, Operation::Delete, format!("all tasks of event {id}"));
        }
        if self.reminders.remove(id) {
            self.journal
                .record(Structure::Queue, Operation::Dequeue, format!("event {id}"));
        }
        Ok(Some(event))
    }

    fn resolve(&self, id: EventId) -> Result<&Event> {
        self.events.get(&id).ok_or_else(|| {
            error!("Event {id} referenced by a structure but missing from the store");
            PlannerError::inconsistent(id, "referenced but not in the store")
        })
    }
}

impl Default for EventPlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
