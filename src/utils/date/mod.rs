// Date utility functions

use chrono::{DateTime, Local, NaiveDate};

use crate::models::calendar::CalendarError;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical key for one calendar day, e.g. "2025-11-14".
/// Both the content store writer and the grid reader must go through this
/// function; a key produced any other way may silently miss its day.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a date key produced by [`date_key`]
pub fn parse_date_key(key: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| CalendarError::InvalidDateKey(key.to_string()))
}

/// Today as a plain calendar date, no time-of-day component.
/// The one place the system clock is read; callers thread the result into
/// grid construction so classification stays deterministic and testable.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}
