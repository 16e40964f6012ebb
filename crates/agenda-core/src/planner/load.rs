//! Seeding the EventPlanner from persisted state.
//!
//! Loading registers events with the store, index, task map and reminder
//! queue, but records no undo snapshots, writes nothing to the journal and
//! consumes no ids.

use log::{debug, error, info, warn};

use super::EventPlanner;
use crate::{
    config::PlannerConfig,
    error::{PlannerError, Result},
    models::{Event, EventId, Snapshot},
    persistence::Persistence,
    structures::TaskList,
};

impl EventPlanner {
    /// Builds a planner from everything `persistence` holds.
    ///
    /// The id counter starts one past the highest loaded id, or at 1 for an
    /// empty store.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures, and fails like
    /// [`EventPlanner::load_event`] on an unusable event.
    pub fn restore<P>(persistence: &P, config: PlannerConfig) -> Result<Self>
    where
        P: Persistence + ?Sized,
    {
        let mut planner = Self::new(config);
        for event in persistence.load_all_events()? {
            let id = event.id;
            planner.load_event(event)?;
            let tasks = persistence.load_tasks_for_event(id)?;
            planner.load_tasks(id, tasks);
        }
        info!(
            "Restored {} event(s), next event id is {}",
            planner.len(),
            planner.next_id
        );
        Ok(planner)
    }

    /// Registers a persisted event with its id kept as is.
    ///
    /// A previously loaded event with the same id is replaced. The event gets
    /// an empty task list unless it already has one, and joins the reminder
    /// queue when its flag is set. Raises the id counter past `event.id` if
    /// it is behind. Nothing is journaled.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `event.id` is the largest
    /// possible id, and `PlannerError::Inconsistent` if the event it replaces
    /// has no index entry.
    pub fn load_event(&mut self, event: Event) -> Result<()> {
        let id = event.id;
        let next_id = id.checked_add(1).ok_or_else(|| {
            PlannerError::invalid_input("id")
                .with_reason(format!("{id} leaves no id to assign next"))
        })?;

        if let Some(stale) = self.events.get(&id).map(Event::starts_at) {
            debug!("Replacing loaded event {id}");
            if !self.index.remove(stale, id) {
                error!("Loaded event {id} missing from chronological index under {stale}");
                return Err(PlannerError::inconsistent(
                    id,
                    format!("no index entry under {stale}"),
                ));
            }
            self.reminders.remove(id);
        }

        self.index.insert(event.starts_at(), id);
        self.tasks.entry(id).or_default();
        if event.reminder {
            self.reminders.enqueue(id);
        }
        self.events.insert(id, event);
        self.reserve_ids_below(next_id);
        Ok(())
    }

    /// Replaces the task list of a loaded event. Returns false, dropping the
    /// tasks, when the event is unknown.
    pub fn load_tasks(&mut self, event_id: EventId, tasks: TaskList) -> bool {
        if !self.events.contains_key(&event_id) {
            warn!("Ignoring {} task(s) for unknown event {event_id}", tasks.len());
            return false;
        }
        self.tasks.insert(event_id, tasks);
        true
    }

    /// Replays persisted snapshots, oldest first, into the undo history.
    ///
    /// Snapshots of events that are no longer in the store are skipped.
    pub fn load_history<I>(&mut self, snapshots: I)
    where
        I: IntoIterator<Item = Snapshot>,
    {
        for snapshot in snapshots {
            if self.events.contains_key(&snapshot.event.id) {
                self.history.push(snapshot);
            } else {
                warn!(
                    "Skipping {} snapshot of missing event {}",
                    snapshot.kind.as_str(),
                    snapshot.event.id
                );
            }
        }
    }
}
