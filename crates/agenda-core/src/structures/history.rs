//! Bounded undo history.
//!
//! A deque used as a stack: pushes and pops happen at the back, and a push
//! beyond capacity silently evicts the oldest snapshot from the front.

use std::collections::VecDeque;

use crate::models::{EventId, Snapshot};

/// Capacity used when none is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct UndoHistory {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl UndoHistory {
    /// Creates an empty history. A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pushes a snapshot, returning the evicted oldest one when full.
    pub fn push(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(snapshot);
        evicted
    }

    /// Takes the newest snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    #[cfg(test)]
    pub fn peek(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    /// Drops every snapshot of `id`, returning how many were dropped.
    pub fn discard(&mut self, id: EventId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|snapshot| snapshot.event.id != id);
        before - self.entries.len()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        self.entries.iter().rev()
    }

    /// Oldest first, the order to replay them in with [`UndoHistory::push`].
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        self.entries.iter()
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}
