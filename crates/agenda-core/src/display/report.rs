//! Markdown rendering of the activity report.

use std::fmt;

use crate::models::Report;

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Agenda report")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Events**: {} ({} upcoming, {} past)",
            self.total_events, self.upcoming_events, self.past_events
        )?;
        writeln!(f, "- **Index height**: {}", self.index_height)?;
        writeln!(
            f,
            "- **Tasks**: {}/{} complete ({:.0}%)",
            self.completed_tasks,
            self.total_tasks,
            self.completion_ratio() * 100.0
        )?;
        writeln!(
            f,
            "- **Undo history**: {}/{}",
            self.history_depth, self.history_capacity
        )?;
        writeln!(f, "- **Pending reminders**: {}", self.pending_reminders)?;
        writeln!(f)?;

        writeln!(f, "## Activity")?;
        writeln!(f)?;
        writeln!(f, "| Structure | Operations |")?;
        writeln!(f, "|:-|-:|")?;
        for activity in &self.activity {
            writeln!(f, "| {} | {} |", activity.structure, activity.operations)?;
        }
        Ok(())
    }
}
