//! Undo operations for the EventPlanner.

use log::{info, warn};

use super::EventPlanner;
use crate::{
    error::Result,
    models::{EditKind, Snapshot, Undo},
    structures::{Operation, Structure},
};

impl EventPlanner {
    /// Reverts the most recent create or update.
    ///
    /// Returns `Ok(None)` when the history is empty. Undoing an update
    /// restores the captured fields, re-keys the index if the start moved and
    /// rebuilds queue membership from the restored reminder flag. Undoing a
    /// creation removes the event from every structure.
    pub fn undo_last_edit(&mut self) -> Result<Option<Undo>> {
        let Some(snapshot) = self.history.pop() else {
            info!("Nothing to undo");
            return Ok(None);
        };
        let id = snapshot.event.id;
        self.journal.record(
            Structure::History,
            Operation::Pop,
            format!("{} of event {id}", snapshot.kind.as_str()),
        );

        let current_start = self.events.get(&id).map(|event| event.starts_at());
        let undo = match (snapshot.kind, current_start) {
            (EditKind::Update, Some(current_start)) => {
                let restored = snapshot.event;
                let restored_start = restored.starts_at();
                if restored_start != current_start {
                    self.index_remove(current_start, id)?;
                    self.index_insert(restored_start, id, Operation::Reindex);
                }
                self.events.insert(id, restored.clone());
                self.requeue(id, restored.reminder);
                info!("Reverted update of event {id}");
                Undo::Reverted(restored)
            }
            (EditKind::Update, None) => {
                warn!("Event {id} no longer exists, treating its update snapshot as a creation");
                Undo::Removed(snapshot.event)
            }
            (EditKind::Create, _) => {
                let removed = self.purge(id)?.unwrap_or(snapshot.event);
                info!("Reverted creation of event {id}");
                Undo::Removed(removed)
            }
        };
        Ok(Some(undo))
    }

    /// Snapshots available to undo, newest first.
    pub fn edit_history(&self) -> Vec<Snapshot> {
        self.history.iter().cloned().collect()
    }
}
