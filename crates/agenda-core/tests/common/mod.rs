#![allow(dead_code)]

use agenda_core::{params::CreateEvent, Session, SessionBuilder};
use jiff::civil::{date, DateTime};
use tempfile::TempDir;

/// Helper function to create a test session on a fresh database
pub async fn create_test_session() -> (TempDir, Session) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let session = SessionBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create session");
    (temp_dir, session)
}

/// Parameters for an event with only the required fields set.
pub fn event_params(name: &str, date: &str, time: &str, reminder: bool) -> CreateEvent {
    CreateEvent {
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        reminder,
        ..Default::default()
    }
}

/// A moment in July 2025.
pub fn july(day: i8, hour: i8, minute: i8) -> DateTime {
    date(2025, 7, day).at(hour, minute, 0, 0)
}
