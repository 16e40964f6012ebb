//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the core
//! domain models, separated from the model definitions. Output is markdown
//! for the terminal renderer.

use std::fmt;

use super::datetime::StartsAt;
use crate::models::{EditKind, Event, ReminderScan, Snapshot, Task, Undo};

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Task {
    /// Completion marker used in task lists.
    pub fn icon(&self) -> &'static str {
        if self.completed { "✓" } else { "○" }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} {}", self.icon(), self.description)
    }
}

impl Event {
    /// Format the event as a list entry: heading plus the fields that are
    /// set.
    pub(super) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bell = if self.reminder { " 🔔" } else { "" };
        writeln!(f, "## {} (ID: {}){bell}", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **When**: {}", StartsAt(self.starts_at()))?;
        if !self.location.is_empty() {
            writeln!(f, "- **Location**: {}", self.location)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- When: {}", StartsAt(self.starts_at()))?;
        if !self.location.is_empty() {
            writeln!(f, "- Location: {}", self.location)?;
        }
        let attendees = self.attendee_list();
        if !attendees.is_empty() {
            writeln!(f, "- Attendees: {}", attendees.join(", "))?;
        }
        writeln!(f, "- Reminder: {}", if self.reminder { "on" } else { "off" })?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = &self.event;
        match self.kind {
            EditKind::Create => writeln!(
                f,
                "**create** of '{}' (ID: {}) at {}",
                event.name,
                event.id,
                StartsAt(event.starts_at())
            ),
            EditKind::Update => writeln!(
                f,
                "**update** of '{}' (ID: {}), previously at {}",
                event.name,
                event.id,
                StartsAt(event.starts_at())
            ),
        }
    }
}

impl fmt::Display for Undo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Undo::Reverted(event) => {
                writeln!(f, "Reverted the last update of event {}", event.id)?;
                writeln!(f)?;
                write!(f, "{event}")
            }
            Undo::Removed(event) => writeln!(
                f,
                "Undid the creation of '{}' (ID: {})",
                event.name, event.id
            ),
        }
    }
}

impl fmt::Display for ReminderScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No reminders due.");
        }

        if !self.due_soon.is_empty() {
            writeln!(f, "## Due soon")?;
            writeln!(f)?;
            for event in &self.due_soon {
                writeln!(
                    f,
                    "- **{}** (ID: {}) at {}",
                    event.name,
                    event.id,
                    StartsAt(event.starts_at())
                )?;
            }
            writeln!(f)?;
        }

        if !self.past_due.is_empty() {
            writeln!(f, "## Past due")?;
            writeln!(f)?;
            for event in &self.past_due {
                writeln!(
                    f,
                    "- **{}** (ID: {}) started {}",
                    event.name,
                    event.id,
                    StartsAt(event.starts_at())
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    fn sample_event() -> Event {
        Event {
            id: 3,
            name: "Launch".to_string(),
            date: date(2025, 7, 10),
            time: time(14, 0, 0, 0),
            location: "Main hall".to_string(),
            description: "Ship it.".to_string(),
            attendees: "Alice, ,Bob".to_string(),
            reminder: true,
        }
    }

    #[test]
    fn test_event_display() {
        let output = sample_event().to_string();
        assert!(output.starts_with("# 3. Launch\n"));
        assert!(output.contains("- When: Thu 2025-07-10 14:00"));
        assert!(output.contains("- Location: Main hall"));
        assert!(output.contains("- Attendees: Alice, Bob"));
        assert!(output.contains("- Reminder: on"));
        assert!(output.ends_with("Ship it.\n"));
    }

    #[test]
    fn test_task_display() {
        let mut task = Task::new("Book room");
        assert_eq!(task.to_string(), "- ○ Book room\n");
        task.completed = true;
        assert_eq!(task.to_string(), "- ✓ Book room\n");
    }

    #[test]
    fn test_undo_display() {
        let removed = Undo::Removed(sample_event()).to_string();
        assert_eq!(removed, "Undid the creation of 'Launch' (ID: 3)\n");

        let reverted = Undo::Reverted(sample_event()).to_string();
        assert!(reverted.contains("Reverted the last update of event 3"));
        assert!(reverted.contains("# 3. Launch"));
    }

    #[test]
    fn test_reminder_scan_display() {
        assert_eq!(ReminderScan::default().to_string(), "No reminders due.\n");

        let scan = ReminderScan {
            past_due: vec![],
            due_soon: vec![sample_event()],
        };
        let output = scan.to_string();
        assert!(output.contains("## Due soon"));
        assert!(output.contains("**Launch** (ID: 3)"));
        assert!(!output.contains("Past due"));
    }
}
