mod consts;
mod format;
mod prelude;
mod types;

pub use consts::*;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// A fully resolved Gregorian calendar date.
///
/// Validation happens at construction, so every value of this type is a real
/// date and downstream consumers (formatting, ordering, serialization) never
/// have to re-check. Canonical `Display` is zero-padded ISO `YYYY-MM-DD`; the
/// human-readable rendering lives in [`CalendarDate::pretty`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for date construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year is 0 or exceeds the supported range.
    #[error("Invalid year: {0} (must be 1-{MAX_YEAR})")]
    InvalidYear(u16),

    /// Month is 0 or exceeds 12.
    #[error("Invalid month: {0} (must be 1-{MAX_MONTH})")]
    InvalidMonth(u8),

    /// Day is 0 or does not exist in the given month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

impl CalendarDate {
    /// Creates a date from already-validated components.
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Validates and creates a date from bare numeric components.
    ///
    /// # Errors
    /// Returns `DateError` for the first component that is out of range,
    /// including a day that does not exist in the given month (leap years
    /// are accounted for).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Returns the year component as u16
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component as u8
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component as u8
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(value.0, value.1, value.2)
    }
}

/// Wire shape for serde: bare numeric components, revalidated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDate {
    year: u16,
    month: u8,
    day: u8,
}

impl From<CalendarDate> for RawDate {
    fn from(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<RawDate> for CalendarDate {
    type Error = DateError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::from_ymd(raw.year, raw.month, raw.day)
    }
}
