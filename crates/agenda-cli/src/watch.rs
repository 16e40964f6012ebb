//! Reminder polling loop for `agenda watch`.

use std::{collections::HashSet, time::Duration};

use agenda_core::{models::EventId, ReminderScan};
use anyhow::{Context, Result};
use log::{debug, info};
use tokio::time::{interval, MissedTickBehavior};

use crate::cli::{local_now, Cli};

/// Filters scan results down to alerts that were not shown yet.
///
/// A due-soon event stays inside its window for several polls, and the
/// queue is rebuilt from the database on every poll, so the same event
/// would otherwise be reported repeatedly.
#[derive(Debug, Default)]
pub struct Notifier {
    due_soon: HashSet<EventId>,
    past_due: HashSet<EventId>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the events not yet announced in their category.
    pub fn fresh(&mut self, scan: ReminderScan) -> ReminderScan {
        let ReminderScan { past_due, due_soon } = scan;
        ReminderScan {
            past_due: past_due
                .into_iter()
                .filter(|event| self.past_due.insert(event.id))
                .collect(),
            due_soon: due_soon
                .into_iter()
                .filter(|event| self.due_soon.insert(event.id))
                .collect(),
        }
    }
}

/// Polls the reminder queue every `interval_secs` until Ctrl-C.
pub async fn run(cli: &Cli, interval_secs: u64) -> Result<()> {
    let mut ticker = interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut notifier = Notifier::new();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!("Watching reminders every {interval_secs}s");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let mut planner = cli
                    .session()
                    .load_planner()
                    .await
                    .context("Failed to load planner")?;
                let scan = planner.process_reminders(local_now())?;
                let alerts = notifier.fresh(scan);
                if alerts.is_empty() {
                    debug!("No new reminders");
                } else {
                    cli.renderer().render(&alerts.to_string())?;
                }
            }
            result = &mut shutdown => {
                result.context("Failed to listen for Ctrl-C")?;
                info!("Stopped watching reminders");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::Event;
    use jiff::civil::{date, time};

    fn event(id: EventId) -> Event {
        Event {
            id,
            name: format!("Event {id}"),
            date: date(2025, 7, 10),
            time: time(14, 0, 0, 0),
            location: String::new(),
            description: String::new(),
            attendees: String::new(),
            reminder: true,
        }
    }

    #[test]
    fn test_notifier_reports_each_event_once() {
        let mut notifier = Notifier::new();
        let scan = ReminderScan {
            past_due: vec![],
            due_soon: vec![event(1), event(2)],
        };

        let first = notifier.fresh(scan.clone());
        assert_eq!(first.due_soon.len(), 2);

        let second = notifier.fresh(scan);
        assert!(second.is_empty());
    }

    #[test]
    fn test_notifier_tracks_categories_separately() {
        let mut notifier = Notifier::new();
        notifier.fresh(ReminderScan {
            past_due: vec![],
            due_soon: vec![event(1)],
        });

        let later = notifier.fresh(ReminderScan {
            past_due: vec![event(1)],
            due_soon: vec![event(3)],
        });
        assert_eq!(later.past_due, vec![event(1)]);
        assert_eq!(later.due_soon, vec![event(3)]);
    }
}
