//! Reminder operations for the EventPlanner.

use jiff::civil::DateTime;
use log::{debug, info};

use super::EventPlanner;
use crate::{
    error::Result,
    models::{Event, ReminderScan},
    structures::{Operation, Structure},
};

impl EventPlanner {
    /// Scans the reminder queue against `now`.
    ///
    /// Events that started more than the grace period ago are reported as
    /// past due and dequeued. Events whose start lies within the lead window
    /// are reported as due soon and stay queued, so a later scan inside the
    /// same window reports them again. Everything else is left alone.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Inconsistent` if a queued id has no event; the
    /// queue is not modified in that case.
    pub fn process_reminders(&mut self, now: DateTime) -> Result<ReminderScan> {
        let mut scan = ReminderScan::default();
        for id in self.reminders.iter() {
            let event = self.resolve(id)?;
            let until = event.starts_at().duration_since(now);
            if self.window.is_past_due(until) {
                scan.past_due.push(event.clone());
            } else if self.window.is_due_soon(until) {
                scan.due_soon.push(event.clone());
            }
        }

        for event in &scan.past_due {
            self.reminders.remove(event.id);
            self.journal.record(
                Structure::Queue,
                Operation::PastDue,
                format!("event {} started at {}", event.id, event.starts_at()),
            );
        }
        for event in &scan.due_soon {
            debug!("Event {} '{}' is due soon", event.id, event.name);
            self.journal.record(
                Structure::Queue,
                Operation::DueSoon,
                format!("event {} starts at {}", event.id, event.starts_at()),
            );
        }

        info!(
            "Processed reminders: {} past due, {} due soon, {} still queued",
            scan.past_due.len(),
            scan.due_soon.len(),
            self.reminders.len()
        );
        Ok(scan)
    }

    /// Events waiting in the reminder queue, in enqueue order.
    pub fn reminder_queue(&self) -> Result<Vec<Event>> {
        self.reminders
            .iter()
            .map(|id| self.resolve(id).cloned())
            .collect()
    }
}
