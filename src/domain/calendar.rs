// SPDX-License-Identifier: MPL-2.0
//! Gregorian calendar arithmetic used by the date wheels.
//!
//! Everything here is deterministic: "today" is never read implicitly, it is
//! passed in as a [`ReferenceDate`].

use crate::config::{DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR, MAX_YEAR, MIN_YEAR};
use crate::error::Result;
use chrono::{Datelike, Local, NaiveDate};

/// Months with 30 days.
const THIRTY_DAY_MONTHS: [u32; 4] = [4, 6, 9, 11];

/// Number of months offered by the month wheel.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Returns whether `year` is a Gregorian leap year.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// Any month other than February or one of the 30-day months counts as 31
/// days, so out-of-range months never produce an empty day wheel.
#[must_use]
pub fn day_count(year: i32, month: u32) -> u32 {
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else if THIRTY_DAY_MONTHS.contains(&month) {
        30
    } else {
        31
    }
}

/// Items of the day wheel for a month of `count` days (`1..=count`).
#[must_use]
pub fn day_series(count: u32) -> Vec<u32> {
    (1..=count).collect()
}

/// Items of the month wheel (`1..=12`).
#[must_use]
pub fn month_series() -> Vec<u32> {
    (1..=MONTHS_PER_YEAR).collect()
}

// =============================================================================
// YearRange
// =============================================================================

/// Inclusive range of years offered by the year wheel.
///
/// Bounds are clamped to `MIN_YEAR..=MAX_YEAR` and reordered if given
/// backwards, so the range is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    first: i32,
    last: i32,
}

impl YearRange {
    #[must_use]
    pub fn new(first: i32, last: i32) -> Self {
        let first = first.clamp(MIN_YEAR, MAX_YEAR);
        let last = last.clamp(MIN_YEAR, MAX_YEAR);
        Self {
            first: first.min(last),
            last: first.max(last),
        }
    }

    #[must_use]
    pub fn first(self) -> i32 {
        self.first
    }

    #[must_use]
    pub fn last(self) -> i32 {
        self.last
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Items of the year wheel.
    #[must_use]
    pub fn series(self) -> Vec<i32> {
        (self.first..=self.last).collect()
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR)
    }
}

// =============================================================================
// ReferenceDate
// =============================================================================

/// The date unset wheel fields fall back to ("today" in production).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDate(NaiveDate);

impl ReferenceDate {
    /// The current local calendar date.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Builds a reference date, returning `None` for impossible dates.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses an ISO `YYYY-MM-DD` date, as accepted by `--today`.
    pub fn parse(value: &str) -> Result<Self> {
        Ok(Self(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?))
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }
}
