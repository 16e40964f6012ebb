//! Async persistence around an in-memory [`EventPlanner`].
//!
//! The planner is synchronous and performs no I/O. A [`Session`] plays the
//! caller: it restores a planner from SQLite and writes back what each
//! planner operation returned. Every call opens its own connection inside
//! `tokio::task::spawn_blocking`.
//!
//! # Example
//!
//! ```rust,no_run
//! use agenda_core::{params::CreateEvent, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionBuilder::new()
//!     .with_database_path(Some("agenda.db"))
//!     .build()
//!     .await?;
//!
//! let mut planner = session.load_planner().await?;
//! let event = planner.create_event(&CreateEvent {
//!     name: "Retro".to_string(),
//!     date: "2025-07-10".to_string(),
//!     time: "16:00".to_string(),
//!     ..Default::default()
//! })?;
//! session.save_event(&event).await?;
//! session.save_state(&planner).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use crate::{
    config::PlannerConfig,
    db::Database,
    error::{PlannerError, Result},
    models::{Event, EventId, Undo},
    planner::EventPlanner,
};

mod builder;

pub use builder::SessionBuilder;

/// Handle on the agenda database.
#[derive(Debug, Clone)]
pub struct Session {
    db_path: PathBuf,
    config: PlannerConfig,
}

impl Session {
    fn new(db_path: PathBuf, config: PlannerConfig) -> Self {
        Self { db_path, config }
    }

    /// Path of the database file this session writes to.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `operation` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Restores a planner from the database.
    ///
    /// Events, task lists and the reminder queue come from the stored
    /// events. The id counter and undo history come from the saved planner
    /// state, when there is one.
    pub async fn load_planner(&self) -> Result<EventPlanner> {
        let config = self.config.clone();

        self.with_database(move |db| {
            let mut planner = EventPlanner::restore(&*db, config)?;
            if let Some(next_id) = db.next_event_id()? {
                planner.reserve_ids_below(next_id);
            }
            planner.load_history(db.load_history()?);
            debug!(
                "Loaded planner with {} event(s) and {} undo snapshot(s)",
                planner.len(),
                planner.history().len()
            );
            Ok(planner)
        })
        .await
    }

    /// Inserts or overwrites a stored event.
    pub async fn save_event(&self, event: &Event) -> Result<()> {
        let event = event.clone();
        self.with_database(move |db| db.upsert_event(&event)).await
    }

    /// Writes the current task list of `event_id` from `planner`.
    pub async fn save_tasks(&self, planner: &EventPlanner, event_id: EventId) -> Result<()> {
        let tasks = planner.task_list(event_id).cloned().unwrap_or_default();
        self.with_database(move |db| db.replace_tasks(event_id, &tasks))
            .await
    }

    /// Removes a stored event and its tasks.
    pub async fn delete_event(&self, event_id: EventId) -> Result<bool> {
        self.with_database(move |db| db.remove_event(event_id)).await
    }

    /// Writes the planner's undo history and id counter.
    pub async fn save_state(&self, planner: &EventPlanner) -> Result<()> {
        let history = planner.history().clone();
        let next_id = planner.next_id();

        self.with_database(move |db| {
            db.save_history(&history)?;
            db.set_next_event_id(next_id)
        })
        .await
    }

    /// Persists what an undo did, then the planner state.
    pub async fn save_outcome(&self, planner: &EventPlanner, undo: &Undo) -> Result<()> {
        match undo {
            Undo::Reverted(event) => self.save_event(event).await?,
            Undo::Removed(event) => {
                self.delete_event(event.id).await?;
            }
        }
        self.save_state(planner).await
    }
}
