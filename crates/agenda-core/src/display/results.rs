//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, and delete operations with consistent messaging and resource
//! display.

use std::fmt;

use crate::models::Event;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use agenda_core::{display::CreateResult, models::Event};
/// use jiff::civil::{date, time};
///
/// let event = Event {
///     id: 1,
///     name: "Launch".to_string(),
///     date: date(2025, 7, 10),
///     time: time(14, 0, 0, 0),
///     location: String::new(),
///     description: String::new(),
///     attendees: String::new(),
///     reminder: true,
/// };
///
/// let output = CreateResult::new(event).to_string();
/// assert!(output.starts_with("Created event with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Event> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created event with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Tracks which fields changed so users get clear feedback about what was
/// modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl UpdateResult<Event> {
    /// Builds the result with one change line per field that differs
    /// between `before` and `after`.
    pub fn between(before: &Event, after: Event) -> Self {
        let mut changes = Vec::new();
        if before.name != after.name {
            changes.push(format!("Renamed to '{}'", after.name));
        }
        if before.starts_at() != after.starts_at() {
            changes.push(format!(
                "Moved to {}",
                super::datetime::StartsAt(after.starts_at())
            ));
        }
        if before.location != after.location {
            changes.push("Updated location".to_string());
        }
        if before.description != after.description {
            changes.push("Updated description".to_string());
        }
        if before.attendees != after.attendees {
            changes.push("Updated attendees".to_string());
        }
        if before.reminder != after.reminder {
            let state = if after.reminder { "on" } else { "off" };
            changes.push(format!("Turned reminder {state}"));
        }
        Self::with_changes(after, changes)
    }
}

impl fmt::Display for UpdateResult<Event> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated event with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Event> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted event '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    fn event() -> Event {
        Event {
            id: 7,
            name: "Offsite".to_string(),
            date: date(2025, 9, 1),
            time: time(8, 0, 0, 0),
            location: String::new(),
            description: String::new(),
            attendees: String::new(),
            reminder: false,
        }
    }

    #[test]
    fn test_update_result_lists_changed_fields() {
        let before = event();
        let mut after = event();
        after.time = time(9, 15, 0, 0);
        after.reminder = true;

        let output = UpdateResult::between(&before, after).to_string();
        assert!(output.contains("Changes made:"));
        assert!(output.contains("- Moved to Mon 2025-09-01 09:15"));
        assert!(output.contains("- Turned reminder on"));
        assert!(!output.contains("Renamed"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::between(&event(), event()).to_string();
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result_display() {
        assert_eq!(
            DeleteResult::new(event()).to_string(),
            "Deleted event 'Offsite' (ID: 7)\n"
        );
    }
}
