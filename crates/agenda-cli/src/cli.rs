//! Command handlers for the Agenda CLI.
//!
//! Every command is one short-lived planner session: restore the planner
//! from the database, run one operation, persist what it returned and render
//! the result as markdown.

use agenda_core::{
    display::{EditHistory, Events, Tasks},
    params::{Id, TaskRef, ViewEvents},
    CreateResult, DeleteResult, EventPlanner, OperationStatus, Session, UpdateResult,
};
use anyhow::{bail, Context, Result};
use jiff::{civil::DateTime, Zoned};
use log::debug;

use crate::{
    args::{EventCommands, ReminderCommands, TaskCommands},
    renderer::TerminalRenderer,
};

/// Current local wall-clock time, the reference for upcoming and reminders.
pub fn local_now() -> DateTime {
    Zoned::now().datetime()
}

pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }

    async fn load(&self) -> Result<EventPlanner> {
        self.session
            .load_planner()
            .await
            .context("Failed to load planner")
    }

    pub async fn handle_event_command(&self, command: EventCommands) -> Result<()> {
        match command {
            EventCommands::Create(args) => {
                let mut planner = self.load().await?;
                let event = planner.create_event(&args.into())?;
                self.session.save_event(&event).await?;
                self.session.save_tasks(&planner, event.id).await?;
                self.session.save_state(&planner).await?;
                self.renderer
                    .render(&CreateResult::new(event).to_string())
            }
            EventCommands::Update(args) => {
                let (id, params) = args.into_parts();
                if params.is_empty() {
                    bail!("Nothing to update, pass at least one field to change");
                }
                let mut planner = self.load().await?;
                let Some(before) = planner.get_event(id).cloned() else {
                    bail!("Event {id} not found");
                };
                let Some(after) = planner.update_event(id, &params)? else {
                    bail!("Event {id} not found");
                };
                self.session.save_event(&after).await?;
                self.session.save_state(&planner).await?;
                self.renderer
                    .render(&UpdateResult::between(&before, after).to_string())
            }
            EventCommands::Delete(args) => {
                let Id { id } = args.into();
                let mut planner = self.load().await?;
                let Some(event) = planner.get_event(id).cloned() else {
                    bail!("Event {id} not found");
                };
                planner.delete_event(id)?;
                self.session.delete_event(id).await?;
                self.session.save_state(&planner).await?;
                self.renderer
                    .render(&DeleteResult::new(event).to_string())
            }
            EventCommands::Show(args) => {
                let Id { id } = args.into();
                let planner = self.load().await?;
                let Some(event) = planner.get_event(id) else {
                    bail!("Event {id} not found");
                };
                let tasks = Tasks(planner.get_tasks(id));
                self.renderer
                    .render(&format!("{event}\n## Tasks\n\n{tasks}"))
            }
            EventCommands::List(args) => self.list_events(&args.into()).await,
        }
    }

    pub async fn list_events(&self, params: &ViewEvents) -> Result<()> {
        let planner = self.load().await?;
        let events = Events(planner.view_events(params.upcoming, local_now())?);
        let title = if params.upcoming {
            "Upcoming Events"
        } else {
            "Past Events"
        };
        self.renderer.render(&format!("# {title}\n\n{events}"))
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        let mut planner = self.load().await?;
        let (event_id, status) = match command {
            TaskCommands::Add(args) => {
                let TaskRef {
                    event_id,
                    description,
                } = args.into();
                let status = if planner.add_task(event_id, &description) {
                    OperationStatus::success(format!(
                        "Task '{description}' added to event {event_id}"
                    ))
                } else {
                    OperationStatus::not_found(format!("Event {event_id} does not exist"))
                };
                (event_id, status)
            }
            TaskCommands::Remove(args) => {
                let TaskRef {
                    event_id,
                    description,
                } = args.into();
                let status = if planner.remove_task(event_id, &description) {
                    OperationStatus::success(format!(
                        "Task '{description}' removed from event {event_id}"
                    ))
                } else {
                    OperationStatus::not_found(format!(
                        "No task '{description}' on event {event_id}"
                    ))
                };
                (event_id, status)
            }
            TaskCommands::Done(args) => {
                let TaskRef {
                    event_id,
                    description,
                } = args.into();
                let status = if planner.mark_task_complete(event_id, &description) {
                    OperationStatus::success(format!(
                        "Task '{description}' on event {event_id} is complete"
                    ))
                } else {
                    OperationStatus::not_found(format!(
                        "No task '{description}' on event {event_id}"
                    ))
                };
                (event_id, status)
            }
            TaskCommands::List(args) => {
                let Id { id } = args.into();
                let Some(event) = planner.get_event(id) else {
                    bail!("Event {id} not found");
                };
                let tasks = Tasks(planner.get_tasks(id));
                return self
                    .renderer
                    .render(&format!("# Tasks of {}\n\n{tasks}", event.name));
            }
        };

        if status.is_success() {
            self.session.save_tasks(&planner, event_id).await?;
        }
        self.renderer.render(&status.to_string())
    }

    pub async fn undo(&self) -> Result<()> {
        let mut planner = self.load().await?;
        match planner.undo_last_edit()? {
            Some(undo) => {
                self.session.save_outcome(&planner, &undo).await?;
                self.renderer.render(&undo.to_string())
            }
            None => self
                .renderer
                .render(&OperationStatus::not_found("Nothing to undo").to_string()),
        }
    }

    pub async fn history(&self) -> Result<()> {
        let planner = self.load().await?;
        let history = EditHistory(planner.edit_history());
        self.renderer.render(&format!("# Undo History\n\n{history}"))
    }

    pub async fn handle_reminder_command(&self, command: ReminderCommands) -> Result<()> {
        let mut planner = self.load().await?;
        match command {
            ReminderCommands::Check => {
                let now = local_now();
                debug!("Checking reminders at {now}");
                let scan = planner.process_reminders(now)?;
                self.renderer.render(&scan.to_string())
            }
            ReminderCommands::Queue => {
                let queued = Events(planner.reminder_queue()?);
                self.renderer
                    .render(&format!("# Reminder Queue\n\n{queued}"))
            }
        }
    }

    pub async fn report(&self) -> Result<()> {
        let planner = self.load().await?;
        self.renderer
            .render(&planner.report(local_now()).to_string())
    }
}
