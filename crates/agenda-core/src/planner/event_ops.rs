//! Event operations for the EventPlanner.

use jiff::civil::DateTime;
use log::{info, warn};

use super::EventPlanner;
use crate::{
    error::{PlannerError, Result},
    models::{
        schedule::{parse_date, parse_schedule, parse_time},
        Event, EventId, Snapshot,
    },
    params::{CreateEvent, UpdateEvent},
    structures::{Operation, Structure, TaskList},
};

impl EventPlanner {
    /// Creates an event and registers it with every structure.
    ///
    /// The new event gets the next id, an empty task list, a queue slot when
    /// `reminder` is set, and a creation snapshot in the undo history.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the date or time does not
    /// parse. Nothing is mutated in that case and the id is not consumed.
    pub fn create_event(&mut self, params: &CreateEvent) -> Result<Event> {
        info!(
            "Creating event '{}' at {} {}",
            params.name, params.date, params.time
        );
        let starts_at = parse_schedule(&params.date, &params.time)?;

        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or_else(|| {
            PlannerError::invalid_input("id").with_reason("event ids are exhausted")
        })?;
        let event = Event {
            id,
            name: params.name.clone(),
            date: starts_at.date(),
            time: starts_at.time(),
            location: params.location.clone(),
            description: params.description.clone(),
            attendees: params.attendees.clone(),
            reminder: params.reminder,
        };

        self.events.insert(id, event.clone());
        self.index_insert(starts_at, id, Operation::Insert);
        self.tasks.insert(id, TaskList::new());
        self.journal.record(
            Structure::TaskList,
            Operation::Initialize,
            format!("empty list for event {id}"),
        );
        if event.reminder {
            self.enqueue(id);
        }
        self.push_history(Snapshot::created(event.clone()));
        self.next_id = next_id;

        info!("Event {id} '{}' created", event.name);
        Ok(event)
    }

    /// Applies the supplied fields to an existing event.
    ///
    /// Returns `Ok(None)` when the id is unknown. A changed start re-keys the
    /// index; a changed reminder flag, or a re-keyed event with a reminder,
    /// re-evaluates queue membership. The pre-update state is pushed to the
    /// undo history.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if a supplied date or time does
    /// not parse; the event is left untouched. Returns
    /// `PlannerError::Inconsistent` if the index lost track of the event.
    pub fn update_event(&mut self, id: EventId, params: &UpdateEvent) -> Result<Option<Event>> {
        info!("Updating event {id}");
        let Some(previous) = self.events.get(&id).cloned() else {
            warn!("Event {id} not found for update");
            return Ok(None);
        };

        let old_start = previous.starts_at();
        let new_start = resolve_start(&previous, params)?;
        let rekeyed = new_start != old_start;
        let reminder_changed = params
            .reminder
            .is_some_and(|reminder| reminder != previous.reminder);

        let event = self
            .events
            .get_mut(&id)
            .ok_or_else(|| PlannerError::inconsistent(id, "vanished during update"))?;
        if let Some(name) = &params.name {
            event.name.clone_from(name);
        }
        if let Some(location) = &params.location {
            event.location.clone_from(location);
        }
        if let Some(description) = &params.description {
            event.description.clone_from(description);
        }
        if let Some(attendees) = &params.attendees {
            event.attendees.clone_from(attendees);
        }
        if let Some(reminder) = params.reminder {
            event.reminder = reminder;
        }
        event.date = new_start.date();
        event.time = new_start.time();
        let updated = event.clone();

        if rekeyed {
            self.index_remove(old_start, id)?;
            self.index_insert(new_start, id, Operation::Reindex);
        }
        if reminder_changed || (rekeyed && updated.reminder) {
            self.requeue(id, updated.reminder);
        }
        self.push_history(Snapshot::updated(previous));

        info!("Event {id} updated");
        Ok(Some(updated))
    }

    /// Removes an event from every structure.
    ///
    /// Returns `Ok(false)` when the id is unknown. Deletion is not undoable;
    /// snapshots of the deleted event are discarded from the undo history.
    pub fn delete_event(&mut self, id: EventId) -> Result<bool> {
        info!("Deleting event {id}");
        let Some(event) = self.purge(id)? else {
            warn!("Event {id} not found for deletion");
            return Ok(false);
        };

        let discarded = self.history.discard(id);
        if discarded > 0 {
            self.journal.record(
                Structure::History,
                Operation::Discard,
                format!("{discarded} snapshot(s) of event {id}"),
            );
        }

        info!("Event {id} '{}' deleted", event.name);
        Ok(true)
    }

    /// Events in chronological order, split at `now`.
    ///
    /// With `upcoming` set the result holds events starting at or after
    /// `now`; otherwise those starting strictly before it. Equal starts keep
    /// their insertion order.
    pub fn view_events(&self, upcoming: bool, now: DateTime) -> Result<Vec<Event>> {
        self.index
            .iter()
            .filter(|(starts_at, _)| (*starts_at >= now) == upcoming)
            .map(|(_, id)| self.resolve(id).cloned())
            .collect()
    }

    /// Every event in chronological order.
    pub fn all_events(&self) -> Result<Vec<Event>> {
        self.index
            .iter()
            .map(|(_, id)| self.resolve(id).cloned())
            .collect()
    }
}

/// Start of `previous` after applying any supplied date or time. The missing
/// half keeps its current value.
fn resolve_start(previous: &Event, params: &UpdateEvent) -> Result<DateTime> {
    let date = match &params.date {
        Some(date) => parse_date(date)?,
        None => previous.date,
    };
    let time = match &params.time {
        Some(time) => parse_time(time)?,
        None => previous.time,
    };
    Ok(date.to_datetime(time))
}
