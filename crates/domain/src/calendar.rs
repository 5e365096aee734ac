// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Summer calendar.
//!
//! Week boundaries are derived from ISO 8601 week dates. The summer range,
//! the fixed holiday week and the two holiday-adjacent weeks are constants;
//! only the year is configurable.

use crate::error::DomainError;
use crate::types::WeekNumber;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use time::{Date, Duration, Weekday};

/// The week every employee takes off as a block. Never selectable.
pub const FIXED_HOLIDAY_WEEK: WeekNumber = WeekNumber::new(33);

/// The holiday-adjacent week before the fixed holiday week.
pub const PRE_HOLIDAY_WEEK: WeekNumber = WeekNumber::new(32);

/// The holiday-adjacent week after the fixed holiday week.
pub const POST_HOLIDAY_WEEK: WeekNumber = WeekNumber::new(34);

/// Summer weeks preceding the fixed holiday week.
pub const WEEKS_BEFORE_HOLIDAY: RangeInclusive<u16> = 23..=32;

/// Summer weeks following the fixed holiday week.
pub const WEEKS_AFTER_HOLIDAY: RangeInclusive<u16> = 34..=38;

/// Position of a week relative to the fixed holiday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekCategory {
    /// The week number precedes the fixed holiday week.
    Before,
    /// The week number is the fixed holiday week or follows it.
    After,
}

impl WeekCategory {
    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl std::fmt::Display for WeekCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boundaries and category of one ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekInfo {
    /// The ISO year.
    pub year: u16,
    /// The ISO week number.
    pub week: WeekNumber,
    /// Monday of the week.
    pub start: Date,
    /// Sunday of the week (`start + 6 days`).
    pub end: Date,
    /// Position relative to the fixed holiday week.
    pub category: WeekCategory,
}

impl WeekInfo {
    /// Short human-readable label, e.g. `Week 32 (03/08 - 09/08)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Week {} ({} - {})",
            self.week,
            day_month(self.start),
            day_month(self.end)
        )
    }

    /// Period with the closing year, e.g. `03/08-09/08/2026`.
    #[must_use]
    pub fn period(&self) -> String {
        format!(
            "{}-{}/{}",
            day_month(self.start),
            day_month(self.end),
            self.end.year()
        )
    }
}

fn day_month(date: Date) -> String {
    format!("{:02}/{:02}", date.day(), u8::from(date.month()))
}

/// Returns the number of ISO weeks (52 or 53) in the given year.
#[must_use]
pub fn weeks_in_year(year: u16) -> u8 {
    time::util::weeks_in_year(i32::from(year))
}

/// Derives the boundaries and category of an ISO week.
///
/// # Errors
///
/// Returns `DomainError::InvalidWeek` if the week number is outside
/// `1..=weeks_in_year(year)`.
pub fn week_info(year: u16, week: WeekNumber) -> Result<WeekInfo, DomainError> {
    let invalid = || DomainError::InvalidWeek {
        year,
        week: week.value(),
    };

    if week.value() == 0 || week.value() > u16::from(weeks_in_year(year)) {
        return Err(invalid());
    }

    let iso_week: u8 = u8::try_from(week.value()).map_err(|_| invalid())?;
    let start: Date = Date::from_iso_week_date(i32::from(year), iso_week, Weekday::Monday)
        .map_err(|_| invalid())?;
    let end: Date = start.checked_add(Duration::days(6)).ok_or_else(invalid)?;

    let category: WeekCategory = if week < FIXED_HOLIDAY_WEEK {
        WeekCategory::Before
    } else {
        WeekCategory::After
    };

    Ok(WeekInfo {
        year,
        week,
        start,
        end,
        category,
    })
}

/// Returns whether the week belongs to the selectable summer range.
#[must_use]
pub fn is_summer_week(week: WeekNumber) -> bool {
    WEEKS_BEFORE_HOLIDAY.contains(&week.value()) || WEEKS_AFTER_HOLIDAY.contains(&week.value())
}

/// Returns whether the week is one of the two holiday-adjacent weeks.
#[must_use]
pub fn is_holiday_week(week: WeekNumber) -> bool {
    week == PRE_HOLIDAY_WEEK || week == POST_HOLIDAY_WEEK
}

/// The two legal values for the mandatory holiday slot.
#[must_use]
pub const fn holiday_weeks() -> [WeekNumber; 2] {
    [PRE_HOLIDAY_WEEK, POST_HOLIDAY_WEEK]
}

/// Iterates the summer range in ascending order.
pub fn summer_weeks() -> impl Iterator<Item = WeekNumber> {
    WEEKS_BEFORE_HOLIDAY
        .chain(WEEKS_AFTER_HOLIDAY)
        .map(WeekNumber::new)
}
