//! Parsing and formatting of event dates and times.
//!
//! Dates are entered as `YYYY-MM-DD` and times as 24-hour `HH:MM`. Both
//! are validated before any planner structure is touched.

use jiff::civil::{Date, DateTime, Time};
use log::error;

use crate::error::{PlannerError, Result};

/// strftime/strptime pattern for event dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// strftime/strptime pattern for event times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(date: &str) -> Result<Date> {
    Date::strptime(DATE_FORMAT, date.trim()).map_err(|e| {
        error!("Invalid date '{date}': {e}");
        PlannerError::invalid_input("date")
            .with_reason(format!("'{date}' is not a valid date, use YYYY-MM-DD"))
    })
}

/// Parses a 24-hour `HH:MM` time.
pub fn parse_time(time: &str) -> Result<Time> {
    Time::strptime(TIME_FORMAT, time.trim()).map_err(|e| {
        error!("Invalid time '{time}': {e}");
        PlannerError::invalid_input("time")
            .with_reason(format!("'{time}' is not a valid time, use HH:MM"))
    })
}

/// Parses a date and a time into the point in time an event starts at.
pub fn parse_schedule(date: &str, time: &str) -> Result<DateTime> {
    Ok(parse_date(date)?.to_datetime(parse_time(time)?))
}

/// Formats a date the way it is entered.
pub fn format_date(date: Date) -> String {
    date.strftime(DATE_FORMAT).to_string()
}

/// Formats a time the way it is entered.
pub fn format_time(time: Time) -> String {
    time.strftime(TIME_FORMAT).to_string()
}
