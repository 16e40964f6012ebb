//! Command-line interface definitions using clap
//!
//! CLI argument structures carry the clap derives and convert into the core
//! parameter types with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → EventPlanner
//! ```

use std::path::PathBuf;

use agenda_core::{
    models::EventId,
    params::{CreateEvent, Id, TaskRef, UpdateEvent, ViewEvents},
    DEFAULT_POLL_INTERVAL_SECS,
};
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Small event planner with tasks, undo and reminders
///
/// Events are ordered by their start date and time. Each event has its own
/// task list, the last ten creates or updates can be undone, and events with
/// a reminder are reported shortly before they start.
#[derive(Parser)]
#[command(version, about, name = "agenda")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/agenda/agenda.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Number of edits kept for undo
    #[arg(long, global = true, value_name = "N")]
    pub history_capacity: Option<usize>,

    /// Minutes before the start at which an event is due soon
    #[arg(long, global = true, value_name = "MINUTES")]
    pub reminder_lead_mins: Option<i64>,

    /// Minutes after the start at which an event becomes past due
    #[arg(long, global = true, value_name = "MINUTES")]
    pub reminder_grace_mins: Option<i64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Agenda CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage events
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// Manage the task list of an event
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Revert the most recent create or update
    Undo,
    /// Show the edits that can be undone, newest first
    History,
    /// Check the reminder queue
    #[command(alias = "r")]
    Reminders {
        #[command(subcommand)]
        command: ReminderCommands,
    },
    /// Poll for reminders until interrupted
    Watch(WatchArgs),
    /// Show statistics about events, tasks and structure activity
    Report,
}

/// Create a new event
#[derive(ClapArgs)]
pub struct CreateEventArgs {
    /// Name of the event
    pub name: String,
    /// Start date, YYYY-MM-DD
    pub date: String,
    /// Start time, HH:MM (24-hour)
    pub time: String,
    /// Where the event takes place
    #[arg(short, long, default_value = "")]
    pub location: String,
    /// Free-form notes
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Comma-separated attendee names
    #[arg(short, long, default_value = "")]
    pub attendees: String,
    /// Remind shortly before the event starts
    #[arg(short, long)]
    pub reminder: bool,
}

impl From<CreateEventArgs> for CreateEvent {
    fn from(val: CreateEventArgs) -> Self {
        CreateEvent {
            name: val.name,
            date: val.date,
            time: val.time,
            location: val.location,
            description: val.description,
            attendees: val.attendees,
            reminder: val.reminder,
        }
    }
}

/// Update fields of an event
///
/// Only the given fields change. A new date or time moves the event in the
/// chronological order.
#[derive(ClapArgs)]
pub struct UpdateEventArgs {
    /// ID of the event to update
    pub id: EventId,
    #[arg(short, long)]
    pub name: Option<String>,
    /// New start date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// New start time, HH:MM
    #[arg(long)]
    pub time: Option<String>,
    #[arg(short, long)]
    pub location: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Comma-separated attendee names
    #[arg(short, long)]
    pub attendees: Option<String>,
    /// Turn the reminder on or off
    #[arg(short, long, value_name = "BOOL")]
    pub reminder: Option<bool>,
}

impl UpdateEventArgs {
    /// Split into the event id and the core update parameters.
    pub fn into_parts(self) -> (EventId, UpdateEvent) {
        (
            self.id,
            UpdateEvent {
                name: self.name,
                date: self.date,
                time: self.time,
                location: self.location,
                description: self.description,
                attendees: self.attendees,
                reminder: self.reminder,
            },
        )
    }
}

/// Identify an event by ID
#[derive(ClapArgs)]
pub struct EventIdArgs {
    /// ID of the event
    pub id: EventId,
}

impl From<EventIdArgs> for Id {
    fn from(val: EventIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// List events in chronological order
#[derive(ClapArgs)]
pub struct ListEventsArgs {
    /// Show events that already started instead of upcoming ones
    #[arg(long)]
    pub past: bool,
}

impl From<ListEventsArgs> for ViewEvents {
    fn from(val: ListEventsArgs) -> Self {
        ViewEvents { upcoming: !val.past }
    }
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Create a new event
    #[command(alias = "c")]
    Create(CreateEventArgs),
    /// Update fields of an event
    #[command(alias = "u")]
    Update(UpdateEventArgs),
    /// Delete an event and its tasks (cannot be undone)
    #[command(aliases = ["d", "rm"])]
    Delete(EventIdArgs),
    /// Show details and tasks of an event
    #[command(alias = "s")]
    Show(EventIdArgs),
    /// List upcoming (default) or past events
    #[command(aliases = ["l", "ls"])]
    List(ListEventsArgs),
}

/// Identify a task by its event and exact description
#[derive(ClapArgs)]
pub struct TaskArgs {
    /// ID of the event the task belongs to
    pub event_id: EventId,
    /// Task description; the first exact match is used
    pub description: String,
}

impl From<TaskArgs> for TaskRef {
    fn from(val: TaskArgs) -> Self {
        TaskRef {
            event_id: val.event_id,
            description: val.description,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Append a task to an event
    #[command(alias = "a")]
    Add(TaskArgs),
    /// Remove the first task with this description
    #[command(alias = "rm")]
    Remove(TaskArgs),
    /// Mark the first task with this description complete
    #[command(alias = "d")]
    Done(TaskArgs),
    /// List the tasks of an event
    #[command(aliases = ["l", "ls"])]
    List(EventIdArgs),
}

#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Report due-soon and past-due events once
    Check,
    /// List events waiting for a reminder
    Queue,
}

/// Poll the reminder queue
///
/// The reminder tolerance is widened to half the interval when needed, so
/// no due-soon window falls between two polls.
#[derive(ClapArgs)]
pub struct WatchArgs {
    /// Seconds between polls
    #[arg(
        long,
        default_value_t = DEFAULT_POLL_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_secs: u64,
}
