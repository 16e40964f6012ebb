//! Task list storage.

use rusqlite::params;

use super::sql_id;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{EventId, Task},
    structures::TaskList,
};

const SELECT_TASKS_BY_EVENT_SQL: &str =
    "SELECT description, completed FROM tasks WHERE event_id = ?1 ORDER BY position";
const DELETE_TASKS_BY_EVENT_SQL: &str = "DELETE FROM tasks WHERE event_id = ?1";
const INSERT_TASK_SQL: &str =
    "INSERT INTO tasks (event_id, position, description, completed) VALUES (?1, ?2, ?3, ?4)";

impl super::Database {
    /// Loads the tasks of an event in list order.
    pub fn get_tasks(&self, event_id: EventId) -> Result<TaskList> {
        let event_id = sql_id(event_id)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_BY_EVENT_SQL)
            .db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map(params![event_id], |row| {
                Ok(Task {
                    description: row.get(0)?,
                    completed: row.get(1)?,
                })
            })
            .db_context("Failed to query tasks")?
            .collect::<rusqlite::Result<TaskList>>()
            .db_context("Failed to read task row")?;

        Ok(tasks)
    }

    /// Replaces every stored task of an event with `tasks`, keeping their
    /// order.
    pub fn replace_tasks(&mut self, event_id: EventId, tasks: &TaskList) -> Result<()> {
        let event_id = sql_id(event_id)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_TASKS_BY_EVENT_SQL, params![event_id])
            .db_context("Failed to clear tasks")?;
        {
            let mut stmt = tx
                .prepare(INSERT_TASK_SQL)
                .db_context("Failed to prepare task insert")?;
            for (position, task) in tasks.iter().enumerate() {
                stmt.execute(params![
                    event_id,
                    position as i64,
                    &task.description,
                    task.completed,
                ])
                .db_context("Failed to insert task")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
