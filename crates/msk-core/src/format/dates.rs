//! Date display and age helpers.
//!
//! Dates render day-first (`DD/MM/YYYY`) in UTC so output does not depend on
//! the host time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::SuggestionStatus;

/// Default age in days after which a pending suggestion is overdue.
pub const DEFAULT_OVERDUE_THRESHOLD_DAYS: i64 = 30;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Displays a timestamp as `DD/MM/YYYY`.
pub struct UkDate<'a>(pub &'a Timestamp);

impl fmt::Display for UkDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_zoned(TimeZone::UTC).strftime("%d/%m/%Y"))
    }
}

/// Displays a timestamp as `DD/MM/YYYY, HH:MM`.
pub struct UkDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for UkDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::UTC).strftime("%d/%m/%Y, %H:%M")
        )
    }
}

pub fn format_date(instant: &Timestamp) -> String {
    UkDate(instant).to_string()
}

pub fn format_date_time(instant: &Timestamp) -> String {
    UkDateTime(instant).to_string()
}

/// Whether a suggestion created at `date_created` is overdue right now.
pub fn is_overdue(date_created: Timestamp, status: SuggestionStatus, threshold_days: i64) -> bool {
    is_overdue_at(date_created, status, threshold_days, Timestamp::now())
}

/// Whether a suggestion is still pending more than `threshold_days` whole
/// days after `date_created`, as of `now`.
pub fn is_overdue_at(
    date_created: Timestamp,
    status: SuggestionStatus,
    threshold_days: i64,
    now: Timestamp,
) -> bool {
    if status != SuggestionStatus::Pending {
        return false;
    }
    let age_days = elapsed_millis(date_created, now).div_euclid(MILLIS_PER_DAY);
    age_days > threshold_days
}

/// Human-readable age of `instant` relative to now.
pub fn relative_time(instant: &Timestamp) -> String {
    relative_time_at(instant, Timestamp::now())
}

/// Human-readable age of `instant` relative to `now`.
///
/// Ages under a minute read "Just now"; minutes, hours and days are used up
/// to a week, after which the plain date is shown.
pub fn relative_time_at(instant: &Timestamp, now: Timestamp) -> String {
    let seconds = elapsed_millis(*instant, now).div_euclid(MILLIS_PER_SECOND);
    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return ago(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "hour");
    }

    let days = hours / 24;
    if days < 7 {
        return ago(days, "day");
    }

    format_date(instant)
}

fn ago(count: i64, unit: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

fn elapsed_millis(from: Timestamp, to: Timestamp) -> i64 {
    to.as_millisecond() - from.as_millisecond()
}
