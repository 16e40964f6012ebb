//! Database operations and SQLite management for events and tasks.
//!
//! This module provides the SQLite store behind the agenda. It handles the
//! connection, schema setup, and specialized query interfaces for events,
//! task lists and the persisted planner state (undo history and id counter).

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Event, EventId},
    persistence::Persistence,
    structures::TaskList,
};

pub mod event_queries;
pub mod schema;
pub mod state_queries;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Event ids are unsigned; SQLite row ids are signed 64-bit.
fn sql_id(id: EventId) -> Result<i64> {
    i64::try_from(id).map_err(|_| {
        PlannerError::invalid_input("id")
            .with_reason(format!("{id} does not fit in a database row id"))
    })
}

impl Persistence for Database {
    fn load_all_events(&self) -> Result<Vec<Event>> {
        self.list_events()
    }

    fn load_tasks_for_event(&self, event_id: EventId) -> Result<TaskList> {
        self.get_tasks(event_id)
    }

    fn save_event(&mut self, event: &Event) -> Result<()> {
        self.upsert_event(event)
    }

    fn save_tasks_for_event(&mut self, event_id: EventId, tasks: &TaskList) -> Result<()> {
        self.replace_tasks(event_id, tasks)
    }

    fn delete_event(&mut self, event_id: EventId) -> Result<()> {
        self.remove_event(event_id).map(|_| ())
    }
}
