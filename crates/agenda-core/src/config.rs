//! Planner configuration.

use jiff::SignedDuration;

use crate::{
    error::{PlannerError, Result},
    structures::{history::DEFAULT_HISTORY_CAPACITY, journal::DEFAULT_JOURNAL_CAPACITY},
};

/// Seconds between reminder polls when none is configured. Twice the
/// default tolerance, so the default due-soon band is never stepped over.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 20;

/// Timing of reminder scans.
///
/// An event is due soon when the time until it starts lies within
/// `lead ± tolerance`, and past due once it started more than `grace` ago.
/// The tolerance band keeps a periodic poll from missing the exact lead mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    lead: SignedDuration,
    tolerance: SignedDuration,
    grace: SignedDuration,
}

impl ReminderWindow {
    /// Validates and builds a window.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if any duration is negative or
    /// the tolerance is not smaller than the lead.
    pub fn new(
        lead: SignedDuration,
        tolerance: SignedDuration,
        grace: SignedDuration,
    ) -> Result<Self> {
        if lead.is_negative() {
            return Err(PlannerError::invalid_input("reminder lead")
                .with_reason("must not be negative"));
        }
        if tolerance.is_negative() || tolerance >= lead {
            return Err(PlannerError::invalid_input("reminder tolerance")
                .with_reason("must be non-negative and smaller than the lead"));
        }
        if grace.is_negative() {
            return Err(PlannerError::invalid_input("reminder grace")
                .with_reason("must not be negative"));
        }
        Ok(Self {
            lead,
            tolerance,
            grace,
        })
    }

    pub fn lead(&self) -> SignedDuration {
        self.lead
    }

    pub fn tolerance(&self) -> SignedDuration {
        self.tolerance
    }

    pub fn grace(&self) -> SignedDuration {
        self.grace
    }

    /// Widens the tolerance to at least half of `interval`.
    ///
    /// The due-soon band is twice the tolerance wide, so scans run
    /// `interval` apart land inside it at least once whatever their phase.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the widened tolerance would
    /// reach the lead.
    pub fn covering_interval(self, interval: SignedDuration) -> Result<Self> {
        let half = interval / 2;
        if half <= self.tolerance {
            return Ok(self);
        }
        Self::new(self.lead, half, self.grace)
    }

    /// Whether an event starting in `until` should be reported as due soon.
    pub fn is_due_soon(&self, until: SignedDuration) -> bool {
        self.lead - self.tolerance <= until && until <= self.lead + self.tolerance
    }

    /// Whether an event starting in `until` (negative once started) has
    /// passed the grace period.
    pub fn is_past_due(&self, until: SignedDuration) -> bool {
        until < -self.grace
    }
}

impl Default for ReminderWindow {
    fn default() -> Self {
        Self {
            lead: SignedDuration::from_mins(3),
            tolerance: SignedDuration::from_secs(10),
            grace: SignedDuration::from_mins(1),
        }
    }
}

/// Tunables of an [`crate::planner::EventPlanner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Snapshots kept by the undo history
    pub history_capacity: usize,
    /// Entries kept by the execution journal
    pub journal_capacity: usize,
    /// Due-soon and past-due timing
    pub reminders: ReminderWindow,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
            reminders: ReminderWindow::default(),
        }
    }
}
