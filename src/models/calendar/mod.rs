// Calendar model
// Month identity, day classification, and the cell types the grid builder emits

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::models::content_item::ContentItem;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Errors for calendar inputs arriving from outside the crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Month index outside 1..=12. Rejected at construction so the grid
    /// builder never sees one.
    #[error("month {month} is outside 1..=12")]
    InvalidMonth { month: u32 },

    /// A date key that does not parse as YYYY-MM-DD
    #[error("invalid date key: {0}")]
    InvalidDateKey(String),
}

/// A specific month of a specific year, month in 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Create a month, rejecting out-of-range month indices
    ///
    /// # Examples
    /// ```
    /// use content_calendar::models::calendar::CalendarMonth;
    ///
    /// let november = CalendarMonth::new(2025, 11).unwrap();
    /// assert_eq!(november.days_in_month(), 30);
    /// assert!(CalendarMonth::new(2025, 13).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, rolling December into January of the next year
    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    /// The preceding month, rolling January into December of the previous year
    pub fn prev(&self) -> Self {
        self.shifted(-1)
    }

    fn shifted(&self, delta_months: i32) -> Self {
        let total_months = (self.year * 12) + (self.month as i32 - 1) + delta_months;
        Self {
            year: total_months.div_euclid(12),
            month: (total_months.rem_euclid(12) + 1) as u32,
        }
    }

    /// The first day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid calendar date")
    }

    /// A specific day of this month. Panics outside 1..=days_in_month.
    pub fn date_of(&self, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, day).expect("valid calendar date")
    }

    /// Number of days in this month, leap years included
    pub fn days_in_month(&self) -> u32 {
        // Last valid day = first day of the following month minus one.
        let first_of_next = self.next().first_day();
        first_of_next.pred_opt().expect("previous day exists").day()
    }

    /// Weekday index of the first day of the month, 0 = Sunday .. 6 = Saturday
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Whether the date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// Temporal classification of a day relative to a supplied "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayClass {
    Past,
    Today,
    Future,
}

impl DayClass {
    /// Classify a date against today. Pure function of the two dates;
    /// NaiveDate ordering is lexicographic (year, month, day).
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        match date.cmp(&today) {
            Ordering::Less => Self::Past,
            Ordering::Equal => Self::Today,
            Ordering::Greater => Self::Future,
        }
    }
}

/// One rendered day of a month grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    /// Day of month, 1..=days_in_month
    pub day: u32,
    pub date: NaiveDate,
    /// The day's content, in insertion (display) order
    pub items: Vec<ContentItem>,
    pub class: DayClass,
}

/// A slot in the month grid: a leading placeholder or an actual day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GridCell {
    /// Placeholder before day 1; carries no day number and is not interactive
    Empty,
    Day(DayCell),
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Empty => None,
            Self::Day(cell) => Some(cell),
        }
    }
}
