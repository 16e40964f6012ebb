//! Event CRUD operations and queries.

use jiff::civil::{Date, Time};
use rusqlite::{params, types::Type, OptionalExtension};

use super::sql_id;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{
        schedule::{format_date, format_time, DATE_FORMAT, TIME_FORMAT},
        Event, EventId,
    },
};

const EVENT_COLUMNS: &str = "id, name, date, time, location, description, attendees, reminder";
const UPSERT_EVENT_SQL: &str = "INSERT INTO events (id, name, date, time, location, description, attendees, reminder) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) ON CONFLICT(id) DO UPDATE SET name = excluded.name, date = excluded.date, time = excluded.time, location = excluded.location, description = excluded.description, attendees = excluded.attendees, reminder = excluded.reminder";
const DELETE_EVENT_TASKS_SQL: &str = "DELETE FROM tasks WHERE event_id = ?1";
const DELETE_EVENT_SQL: &str = "DELETE FROM events WHERE id = ?1";

impl super::Database {
    /// Helper function to construct an Event from a database row
    fn build_event_from_row(row: &rusqlite::Row) -> rusqlite::Result<Event> {
        let date: String = row.get(2)?;
        let date = Date::strptime(DATE_FORMAT, &date)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
        let time: String = row.get(3)?;
        let time = Time::strptime(TIME_FORMAT, &time)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
        let id: i64 = row.get(0)?;
        let id = EventId::try_from(id).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, Box::new(e))
        })?;

        Ok(Event {
            id,
            name: row.get(1)?,
            date,
            time,
            location: row.get(4)?,
            description: row.get(5)?,
            attendees: row.get(6)?,
            reminder: row.get(7)?,
        })
    }

    /// Retrieves an event by its ID.
    pub fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let id = sql_id(id)?;
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1"))
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id], Self::build_event_from_row)
            .optional()
            .db_context("Failed to query event")
    }

    /// Lists every stored event ordered by start.
    pub fn list_events(&self) -> Result<Vec<Event>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {EVENT_COLUMNS} FROM events ORDER BY date, time, id"
            ))
            .db_context("Failed to prepare query")?;

        let events = stmt
            .query_map([], Self::build_event_from_row)
            .db_context("Failed to query events")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read event row")?;

        Ok(events)
    }

    /// Inserts an event, or overwrites the stored fields of an existing id.
    /// Tasks of an existing event are kept.
    pub fn upsert_event(&mut self, event: &Event) -> Result<()> {
        let id = sql_id(event.id)?;
        self.connection
            .execute(
                UPSERT_EVENT_SQL,
                params![
                    id,
                    &event.name,
                    format_date(event.date),
                    format_time(event.time),
                    &event.location,
                    &event.description,
                    &event.attendees,
                    event.reminder,
                ],
            )
            .db_context("Failed to save event")?;
        Ok(())
    }

    /// Deletes an event and its tasks. Returns whether a row was removed.
    pub fn remove_event(&mut self, id: EventId) -> Result<bool> {
        let id = sql_id(id)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_EVENT_TASKS_SQL, params![id])
            .db_context("Failed to delete event tasks")?;
        let deleted = tx
            .execute(DELETE_EVENT_SQL, params![id])
            .db_context("Failed to delete event")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(deleted > 0)
    }
}
