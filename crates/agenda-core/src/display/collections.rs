//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Event, Snapshot, Task};

/// Newtype wrapper for displaying a chronological list of events.
///
/// Each event is shown as a short summary; handles empty collections
/// gracefully.
///
/// # Examples
///
/// ```rust
/// use agenda_core::{display::Events, models::Event};
/// use jiff::civil::{date, time};
///
/// let event = Event {
///     id: 1,
///     name: "Team sync".to_string(),
///     date: date(2025, 7, 10),
///     time: time(9, 30, 0, 0),
///     location: String::new(),
///     description: String::new(),
///     attendees: String::new(),
///     reminder: false,
/// };
///
/// let output = Events(vec![event]).to_string();
/// assert!(output.contains("## Team sync (ID: 1)"));
/// ```
pub struct Events(pub Vec<Event>);

impl Events {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of events in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the events.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.0.iter()
    }
}

impl Index<usize> for Events {
    type Output = Event;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Events {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No events found.")
        } else {
            for event in &self.0 {
                event.fmt_summary(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the task list of one event.
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of completed tasks.
    pub fn completed(&self) -> usize {
        self.0.iter().filter(|task| task.completed).count()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            write!(f, "{task}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}/{} complete", self.completed(), self.len())
    }
}

/// Newtype wrapper for displaying the undo history, newest first.
pub struct EditHistory(pub Vec<Snapshot>);

impl fmt::Display for EditHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Nothing to undo.");
        }
        for (position, snapshot) in self.0.iter().enumerate() {
            write!(f, "{}. {snapshot}", position + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    fn create_test_event(id: u64, name: &str) -> Event {
        Event {
            id,
            name: name.to_string(),
            date: date(2025, 7, 10),
            time: time(14, 0, 0, 0),
            location: "Room 4".to_string(),
            description: String::new(),
            attendees: String::new(),
            reminder: id % 2 == 0,
        }
    }

    #[test]
    fn test_events_display() {
        let events = Events(vec![
            create_test_event(1, "Standup"),
            create_test_event(2, "Review"),
        ]);
        let output = events.to_string();
        assert!(output.contains("## Standup (ID: 1)\n"));
        assert!(output.contains("## Review (ID: 2) 🔔"));
        assert!(output.contains("- **Location**: Room 4"));
        assert!(output.find("Standup") < output.find("Review"));

        assert_eq!(Events(vec![]).to_string(), "No events found.\n");
    }

    #[test]
    fn test_tasks_display() {
        let mut done = Task::new("Agenda");
        done.completed = true;
        let tasks = Tasks(vec![done, Task::new("Slides")]);
        assert_eq!(
            tasks.to_string(),
            "- ✓ Agenda\n- ○ Slides\n\n1/2 complete\n"
        );

        assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
    }

    #[test]
    fn test_edit_history_numbering() {
        let history = EditHistory(vec![
            Snapshot::updated(create_test_event(1, "Standup")),
            Snapshot::created(create_test_event(1, "Standup")),
        ]);
        let output = history.to_string();
        assert!(output.starts_with("1. **update** of 'Standup' (ID: 1)"));
        assert!(output.contains("2. **create** of 'Standup' (ID: 1)"));

        assert_eq!(EditHistory(vec![]).to_string(), "Nothing to undo.\n");
    }
}
