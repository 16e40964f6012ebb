//! Date and time display utilities.

use std::fmt;

use jiff::civil::DateTime;

/// A wrapper around an event start that formats it for people.
///
/// The display format follows the pattern `Www YYYY-MM-DD HH:MM`, for
/// example `Thu 2025-07-10 14:00`. Event starts are civil times with no
/// time zone, so none is shown.
pub struct StartsAt(pub DateTime);

impl fmt::Display for StartsAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %Y-%m-%d %H:%M"))
    }
}
