//! Agenda CLI Application
//!
//! Command-line interface for the agenda event planner.

mod args;
mod cli;
mod renderer;
mod watch;

use std::time::Duration;

use agenda_core::{params::ViewEvents, PlannerConfig, ReminderWindow, SessionBuilder};
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jiff::SignedDuration;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

/// Applies the command-line overrides to the default planner config.
fn planner_config(args: &Args) -> Result<PlannerConfig> {
    let mut config = PlannerConfig::default();

    if let Some(capacity) = args.history_capacity {
        config.history_capacity = capacity;
    }

    if args.reminder_lead_mins.is_some() || args.reminder_grace_mins.is_some() {
        let defaults = config.reminders;
        let lead = args
            .reminder_lead_mins
            .map_or(defaults.lead(), SignedDuration::from_mins);
        let grace = args
            .reminder_grace_mins
            .map_or(defaults.grace(), SignedDuration::from_mins);
        config.reminders = ReminderWindow::new(lead, defaults.tolerance(), grace)
            .context("Invalid reminder settings")?;
    }

    if let Some(Watch(watch_args)) = &args.command {
        let interval = SignedDuration::try_from(Duration::from_secs(watch_args.interval_secs))
            .context("Invalid poll interval")?;
        config.reminders = config
            .reminders
            .covering_interval(interval)
            .context("Poll interval too long for the reminder lead")?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = planner_config(&args)?;
    let Args {
        database_file,
        no_color,
        command,
        ..
    } = args;

    let session = SessionBuilder::new()
        .with_database_path(database_file)
        .with_config(config)
        .build()
        .await
        .context("Failed to initialize agenda")?;

    let cli = Cli::new(session, TerminalRenderer::new(!no_color));

    info!("Agenda started");

    match command {
        Some(Event { command }) => cli.handle_event_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Undo) => cli.undo().await,
        Some(History) => cli.history().await,
        Some(Reminders { command }) => cli.handle_reminder_command(command).await,
        Some(Watch(watch_args)) => watch::run(&cli, watch_args.interval_secs).await,
        Some(Report) => cli.report().await,
        None => cli.list_events(&ViewEvents::default()).await,
    }
}
