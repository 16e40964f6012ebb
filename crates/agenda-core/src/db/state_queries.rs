//! Persisted planner state: undo history and the event id counter.
//!
//! The planner keeps both in memory only. Storing them lets a short-lived
//! process (one CLI invocation) undo edits made by an earlier one, and keeps
//! ids of deleted events from being handed out again.

use rusqlite::{params, types::Type, OptionalExtension};

use super::sql_id;
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{EditKind, Event, EventId, Snapshot},
    structures::UndoHistory,
};

const SELECT_HISTORY_SQL: &str =
    "SELECT kind, snapshot FROM edit_history ORDER BY position ASC";
const DELETE_HISTORY_SQL: &str = "DELETE FROM edit_history";
const INSERT_HISTORY_SQL: &str =
    "INSERT INTO edit_history (position, kind, event_id, snapshot) VALUES (?1, ?2, ?3, ?4)";
const SELECT_STATE_SQL: &str = "SELECT value FROM planner_state WHERE key = ?1";
const UPSERT_STATE_SQL: &str = "INSERT INTO planner_state (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

const NEXT_EVENT_ID_KEY: &str = "next_event_id";

impl super::Database {
    /// Loads the persisted undo snapshots, oldest first.
    pub fn load_history(&self) -> Result<Vec<Snapshot>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_HISTORY_SQL)
            .db_context("Failed to prepare query")?;

        let snapshots = stmt
            .query_map([], |row| {
                let kind_str: String = row.get(0)?;
                let kind = kind_str.parse::<EditKind>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, e.into())
                })?;
                let json: String = row.get(1)?;
                let event: Event = serde_json::from_str(&json).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                })?;
                Ok(Snapshot { kind, event })
            })
            .db_context("Failed to query edit history")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read edit history row")?;

        Ok(snapshots)
    }

    /// Replaces the persisted undo snapshots with the contents of `history`.
    pub fn save_history(&mut self, history: &UndoHistory) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_HISTORY_SQL, [])
            .db_context("Failed to clear edit history")?;
        {
            let mut stmt = tx
                .prepare(INSERT_HISTORY_SQL)
                .db_context("Failed to prepare edit history insert")?;
            for (position, snapshot) in history.iter_oldest_first().enumerate() {
                let json = serde_json::to_string(&snapshot.event)?;
                stmt.execute(params![
                    position as i64,
                    snapshot.kind.as_str(),
                    sql_id(snapshot.event.id)?,
                    json,
                ])
                .db_context("Failed to insert edit history entry")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// The stored id counter, if one was ever saved.
    pub fn next_event_id(&self) -> Result<Option<EventId>> {
        let value: Option<String> = self
            .connection
            .query_row(SELECT_STATE_SQL, params![NEXT_EVENT_ID_KEY], |row| row.get(0))
            .optional()
            .db_context("Failed to query planner state")?;

        value
            .map(|value| {
                value.parse::<EventId>().map_err(|e| {
                    PlannerError::database("Invalid stored event id counter")
                        .with_source(rusqlite::Error::FromSqlConversionFailure(
                            0,
                            Type::Text,
                            Box::new(e),
                        ))
                })
            })
            .transpose()
    }

    pub fn set_next_event_id(&mut self, next_id: EventId) -> Result<()> {
        self.connection
            .execute(
                UPSERT_STATE_SQL,
                params![NEXT_EVENT_ID_KEY, next_id.to_string()],
            )
            .db_context("Failed to save planner state")?;
        Ok(())
    }
}
