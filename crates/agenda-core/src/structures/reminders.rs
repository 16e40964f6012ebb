//! Reminder queue: ids of events with an active reminder, in the order they
//! were queued.

use crate::models::EventId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderQueue {
    entries: Vec<EventId>,
}

impl ReminderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.entries.contains(&id)
    }

    /// Appends `id` unless it is already queued. Returns whether it was added.
    pub fn enqueue(&mut self, id: EventId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.push(id);
        true
    }

    /// Rebuilds the queue without `id`. Returns whether it was present.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|&queued| queued != id);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = EventId> + '_ {
        self.entries.iter().copied()
    }
}
