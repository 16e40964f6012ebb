//! Activity report types.

use serde::{Deserialize, Serialize};

use crate::structures::Structure;

/// Journal activity for one structure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructureActivity {
    pub structure: Structure,
    /// Operations recorded in the journal
    pub operations: usize,
}

/// Snapshot of planner statistics at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    /// Events in the store
    pub total_events: usize,
    /// Events starting at or after the report time
    pub upcoming_events: usize,
    /// Events starting before the report time
    pub past_events: usize,
    /// Longest path in the chronological index
    pub index_height: usize,
    /// Tasks across every event
    pub total_tasks: usize,
    /// Tasks marked complete
    pub completed_tasks: usize,
    /// Snapshots available to undo
    pub history_depth: usize,
    /// Maximum snapshots kept
    pub history_capacity: usize,
    /// Events waiting in the reminder queue
    pub pending_reminders: usize,
    /// Per-structure journal activity
    pub activity: Vec<StructureActivity>,
}

impl Report {
    /// Completed share of all tasks, 0.0 when there are none.
    pub fn completion_ratio(&self) -> f64 {
        if self.total_tasks == 0 {
            0.0
        } else {
            self.completed_tasks as f64 / self.total_tasks as f64
        }
    }
}
