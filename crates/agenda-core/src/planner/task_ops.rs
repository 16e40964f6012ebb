//! Task operations for the EventPlanner.

use log::{info, warn};

use super::EventPlanner;
use crate::{
    models::{EventId, Task},
    structures::{Operation, Structure, TaskList},
};

impl EventPlanner {
    /// Appends an incomplete task to an event's list.
    ///
    /// Returns false when the event does not exist. Duplicate descriptions
    /// are allowed.
    pub fn add_task(&mut self, event_id: EventId, description: &str) -> bool {
        if !self.events.contains_key(&event_id) {
            warn!("Cannot add task, event {event_id} not found");
            return false;
        }
        self.tasks
            .entry(event_id)
            .or_default()
            .push(Task::new(description));
        self.journal.record(
            Structure::TaskList,
            Operation::Append,
            format!("'{description}' to event {event_id}"),
        );
        info!("Task '{description}' added to event {event_id}");
        true
    }

    /// Unlinks the first task with exactly this description.
    pub fn remove_task(&mut self, event_id: EventId, description: &str) -> bool {
        let removed = self
            .tasks
            .get_mut(&event_id)
            .is_some_and(|tasks| tasks.remove(description));
        if removed {
            self.journal.record(
                Structure::TaskList,
                Operation::Remove,
                format!("'{description}' from event {event_id}"),
            );
            info!("Task '{description}' removed from event {event_id}");
        } else {
            warn!("Task '{description}' not found on event {event_id}");
        }
        removed
    }

    /// Marks the first task with exactly this description complete.
    ///
    /// Returns true for an already-complete task too.
    pub fn mark_task_complete(&mut self, event_id: EventId, description: &str) -> bool {
        let marked = self
            .tasks
            .get_mut(&event_id)
            .is_some_and(|tasks| tasks.mark_complete(description));
        if marked {
            self.journal.record(
                Structure::TaskList,
                Operation::Complete,
                format!("'{description}' on event {event_id}"),
            );
            info!("Task '{description}' on event {event_id} marked complete");
        } else {
            warn!("Task '{description}' not found on event {event_id}");
        }
        marked
    }

    /// Copies of an event's tasks in insertion order; empty for an unknown
    /// event.
    pub fn get_tasks(&self, event_id: EventId) -> Vec<Task> {
        self.tasks
            .get(&event_id)
            .map(TaskList::to_vec)
            .unwrap_or_default()
    }

    /// Borrow of an event's task list, for persistence.
    pub fn task_list(&self, event_id: EventId) -> Option<&TaskList> {
        self.tasks.get(&event_id)
    }
}
