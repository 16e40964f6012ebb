//! Undo snapshots.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Event;

/// Which edit a snapshot reverses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// The event was created; undoing removes it.
    Create,

    /// The event was updated; undoing restores the captured fields.
    Update,
}

impl FromStr for EditKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(EditKind::Create),
            "update" => Ok(EditKind::Update),
            _ => Err(format!("Invalid edit kind: {s}")),
        }
    }
}

impl EditKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EditKind::Create => "create",
            EditKind::Update => "update",
        }
    }
}

/// Immutable copy of an event taken before an edit took effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub kind: EditKind,
    pub event: Event,
}

impl Snapshot {
    pub fn created(event: Event) -> Self {
        Self {
            kind: EditKind::Create,
            event,
        }
    }

    pub fn updated(previous: Event) -> Self {
        Self {
            kind: EditKind::Update,
            event: previous,
        }
    }
}
