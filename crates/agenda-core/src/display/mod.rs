//! Display formatting for planner results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers format collections and operation results. Everything is
//! markdown, rendered by the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Event, Task)   │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Events, Tasks and EditHistory wrappers
//! - [`results`]: CreateResult, UpdateResult, DeleteResult
//! - [`status`]: OperationStatus for yes/no outcomes
//! - [`datetime`]: StartsAt formatting
//! - [`models`]: Display for Event, Task, Snapshot, Undo and ReminderScan
//! - [`report`]: Display for Report
//!
//! # Examples
//!
//! ```rust
//! use agenda_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Task 'Book room' added to event 1");
//! assert_eq!(status.to_string(), "Success: Task 'Book room' added to event 1\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;
pub mod results;
pub mod status;

pub use collections::{EditHistory, Events, Tasks};
pub use datetime::StartsAt;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, StatusLevel};
