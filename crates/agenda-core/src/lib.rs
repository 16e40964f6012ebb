//! Core library for the Agenda event planner.
//!
//! This crate provides the in-memory planner (events, a chronological index,
//! per-event task lists, a bounded undo history and a reminder queue), the
//! SQLite store it is persisted to, and markdown display types.
//!
//! # Architecture
//!
//! - [`planner::EventPlanner`]: synchronous, I/O free. Every mutation keeps
//!   the store and its [`structures`] consistent and returns what changed.
//! - [`persistence::Persistence`]: contract for loading and saving events
//!   and task lists; [`db::Database`] implements it on SQLite.
//! - [`session::Session`]: async caller that restores a planner from the
//!   database and persists operation results.
//! - [`display`]: markdown formatting for the terminal renderer.
//!
//! # Quick Start
//!
//! ```rust
//! use agenda_core::{params::CreateEvent, EventPlanner};
//! use jiff::civil::date;
//!
//! let mut planner = EventPlanner::default();
//! let event = planner.create_event(&CreateEvent {
//!     name: "Planning".to_string(),
//!     date: "2025-07-10".to_string(),
//!     time: "10:00".to_string(),
//!     ..Default::default()
//! })?;
//!
//! assert!(planner.add_task(event.id, "Book room"));
//! assert!(planner.mark_task_complete(event.id, "Book room"));
//! assert!(planner.get_tasks(event.id)[0].completed);
//!
//! let past = planner.view_events(false, date(2025, 8, 1).at(0, 0, 0, 0))?;
//! assert_eq!(past.len(), 1);
//! # Ok::<(), agenda_core::PlannerError>(())
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod persistence;
pub mod planner;
pub mod session;
pub mod structures;

// Re-export commonly used types
pub use config::{PlannerConfig, ReminderWindow, DEFAULT_POLL_INTERVAL_SECS};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, EditHistory, Events, OperationStatus, Tasks, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use models::{EditKind, Event, EventId, ReminderScan, Report, Snapshot, Task, Undo};
pub use params::{CreateEvent, Id, TaskRef, UpdateEvent, ViewEvents};
pub use persistence::Persistence;
pub use planner::EventPlanner;
pub use session::{Session, SessionBuilder};
