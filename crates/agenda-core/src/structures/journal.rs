//! Execution journal of structural operations, kept for the activity report.

use std::{collections::VecDeque, fmt};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Entries kept when none is configured.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 1000;

/// The planner structure an operation touched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    Index,
    TaskList,
    History,
    Queue,
}

impl Structure {
    pub const ALL: [Structure; 4] = [
        Structure::Index,
        Structure::TaskList,
        Structure::History,
        Structure::Queue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Structure::Index => "chronological index",
            Structure::TaskList => "task lists",
            Structure::History => "undo history",
            Structure::Queue => "reminder queue",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Insert,
    Reindex,
    Delete,
    Initialize,
    Append,
    Remove,
    Complete,
    Discard,
    Enqueue,
    Dequeue,
    DueSoon,
    PastDue,
    Push,
    Pop,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Reindex => "reindex",
            Operation::Delete => "delete",
            Operation::Initialize => "initialize",
            Operation::Append => "append",
            Operation::Remove => "remove",
            Operation::Complete => "complete",
            Operation::Discard => "discard",
            Operation::Enqueue => "enqueue",
            Operation::Dequeue => "dequeue",
            Operation::DueSoon => "due soon",
            Operation::PastDue => "past due",
            Operation::Push => "push",
            Operation::Pop => "pop",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    pub at: Timestamp,
    pub structure: Structure,
    pub operation: Operation,
    pub details: String,
}

/// Bounded, append-only record of structural operations.
#[derive(Debug, Clone)]
pub struct Journal {
    entries: VecDeque<JournalEntry>,
    capacity: usize,
}

impl Journal {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, structure: Structure, operation: Operation, details: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(JournalEntry {
            at: Timestamp::now(),
            structure,
            operation,
            details: details.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &JournalEntry> + '_ {
        self.entries.iter()
    }

    pub fn count(&self, structure: Structure) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.structure == structure)
            .count()
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_JOURNAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_structure() {
        let mut journal = Journal::default();
        journal.record(Structure::Index, Operation::Insert, "event 1");
        journal.record(Structure::Queue, Operation::Enqueue, "event 1");
        journal.record(Structure::Index, Operation::Delete, "event 1");

        assert_eq!(journal.count(Structure::Index), 2);
        assert_eq!(journal.count(Structure::Queue), 1);
        assert_eq!(journal.count(Structure::History), 0);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut journal = Journal::with_capacity(2);
        journal.record(Structure::TaskList, Operation::Append, "first");
        journal.record(Structure::TaskList, Operation::Append, "second");
        journal.record(Structure::TaskList, Operation::Remove, "third");

        let details: Vec<_> = journal.iter().map(|e| e.details.as_str()).collect();
        assert_eq!(details, vec!["second", "third"]);
    }
}
