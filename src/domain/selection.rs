// SPDX-License-Identifier: MPL-2.0
//! The day/month/year triple chosen on the date wheels.

use super::calendar::{day_count, ReferenceDate};
use std::fmt;

/// One of the three wheels of the date dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Day,
    Month,
    Year,
}

impl DateField {
    pub const ALL: [DateField; 3] = [DateField::Day, DateField::Month, DateField::Year];

    /// Stable widget identifier of the wheel showing this field.
    #[must_use]
    pub fn scrollable_id(self) -> &'static str {
        match self {
            DateField::Day => "dob-wheel-day",
            DateField::Month => "dob-wheel-month",
            DateField::Year => "dob-wheel-year",
        }
    }

    /// Translation key of the wheel heading.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            DateField::Day => "wheel-day-label",
            DateField::Month => "wheel-month-label",
            DateField::Year => "wheel-year-label",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateField::Day => "day",
            DateField::Month => "month",
            DateField::Year => "year",
        };
        f.write_str(name)
    }
}

/// Result of changing the month or the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAdjustment {
    /// Day count of the newly effective month.
    pub day_count: u32,
    /// Day the selection was clamped to, when the previous day no longer fits.
    pub clamped_to: Option<u32>,
}

/// Wheel values touched by the user. `None` means "not touched yet", in which
/// case the reference date supplies the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSelection {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl DateSelection {
    #[must_use]
    pub fn effective_month(&self, reference: &ReferenceDate) -> u32 {
        self.month.unwrap_or_else(|| reference.month())
    }

    #[must_use]
    pub fn effective_year(&self, reference: &ReferenceDate) -> i32 {
        self.year.unwrap_or_else(|| reference.year())
    }

    /// Day count of the effective month/year.
    #[must_use]
    pub fn day_count(&self, reference: &ReferenceDate) -> u32 {
        day_count(self.effective_year(reference), self.effective_month(reference))
    }

    /// The effective day, never above the effective month's day count.
    #[must_use]
    pub fn effective_day(&self, reference: &ReferenceDate) -> u32 {
        let day = self.day.unwrap_or_else(|| reference.day());
        day.min(self.day_count(reference))
    }

    pub fn set_day(&mut self, day: u32) {
        self.day = Some(day);
    }

    pub fn set_month(&mut self, month: u32, reference: &ReferenceDate) -> DayAdjustment {
        self.month = Some(month);
        self.clamp_day(reference)
    }

    pub fn set_year(&mut self, year: i32, reference: &ReferenceDate) -> DayAdjustment {
        self.year = Some(year);
        self.clamp_day(reference)
    }

    /// Pulls the day into the effective month. An untouched day that does not
    /// fit becomes an explicit selection so the wheel and the composed value
    /// agree.
    fn clamp_day(&mut self, reference: &ReferenceDate) -> DayAdjustment {
        let count = self.day_count(reference);
        let day = self.day.unwrap_or_else(|| reference.day());
        let clamped_to = (day > count).then(|| {
            self.day = Some(count);
            count
        });
        DayAdjustment {
            day_count: count,
            clamped_to,
        }
    }

    /// Composes `day/month/year` with untouched fields taken from
    /// `reference`. No zero padding.
    #[must_use]
    pub fn format(&self, reference: &ReferenceDate) -> String {
        format!(
            "{}/{}/{}",
            self.effective_day(reference),
            self.effective_month(reference),
            self.effective_year(reference)
        )
    }
}
