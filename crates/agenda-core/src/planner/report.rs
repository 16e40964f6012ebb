//! Statistics over the planner's current state.

use jiff::civil::DateTime;

use super::EventPlanner;
use crate::{
    models::{Report, StructureActivity},
    structures::Structure,
};

impl EventPlanner {
    /// Summarises events, tasks, history and queue, with events split at
    /// `now` the same way [`EventPlanner::view_events`] splits them.
    pub fn report(&self, now: DateTime) -> Report {
        let upcoming_events = self
            .index
            .iter()
            .filter(|(starts_at, _)| *starts_at >= now)
            .count();
        let (total_tasks, completed_tasks) = self
            .tasks
            .values()
            .fold((0, 0), |(total, done), tasks| {
                (total + tasks.len(), done + tasks.completed())
            });

        Report {
            total_events: self.events.len(),
            upcoming_events,
            past_events: self.index.len() - upcoming_events,
            index_height: self.index.height(),
            total_tasks,
            completed_tasks,
            history_depth: self.history.len(),
            history_capacity: self.history.capacity(),
            pending_reminders: self.reminders.len(),
            activity: Structure::ALL
                .iter()
                .map(|&structure| StructureActivity {
                    structure,
                    operations: self.journal.count(structure),
                })
                .collect(),
        }
    }
}
