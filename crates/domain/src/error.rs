// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{POST_HOLIDAY_WEEK, PRE_HOLIDAY_WEEK};
use crate::types::WeekNumber;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The mandatory holiday slot is missing or not one of the two
    /// holiday-adjacent weeks.
    InvalidHolidaySelection {
        /// The submitted value, if any.
        week: Option<WeekNumber>,
    },
    /// The same week appears in more than one slot of a submission.
    DuplicateSelection {
        /// The week that was selected more than once.
        week: WeekNumber,
    },
    /// The week is outside the summer range or has been marked unavailable.
    WeekUnavailable {
        /// The rejected week.
        week: WeekNumber,
    },
    /// A fourth week was submitted while the fourth slot is disabled.
    FourthSlotDisabled,
    /// The week has no remaining capacity.
    WeekFull {
        /// The full week.
        week: WeekNumber,
        /// The capacity in effect when the submission was rejected.
        capacity: u32,
    },
    /// Calendar lookup outside the ISO weeks of the year.
    InvalidWeek {
        /// The year of the lookup.
        year: u16,
        /// The requested week number.
        week: u16,
    },
    /// Capacity per week must be positive.
    InvalidCapacity(u32),
    /// Employee name is empty or invalid.
    InvalidName(String),
    /// The employee does not exist.
    EmployeeNotFound(i64),
    /// The employee has been deactivated by an administrator.
    EmployeeInactive(String),
    /// The employee has no choice ledger entry.
    ChoiceNotFound(i64),
}

impl DomainError {
    /// Returns the week number the error refers to, if any.
    #[must_use]
    pub const fn week(&self) -> Option<WeekNumber> {
        match self {
            Self::InvalidHolidaySelection { week } => *week,
            Self::DuplicateSelection { week }
            | Self::WeekUnavailable { week }
            | Self::WeekFull { week, .. } => Some(*week),
            _ => None,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHolidaySelection { week: None } => {
                write!(f, "A holiday week must be selected")
            }
            Self::InvalidHolidaySelection { week: Some(week) } => {
                write!(
                    f,
                    "Holiday week must be week {PRE_HOLIDAY_WEEK} or week {POST_HOLIDAY_WEEK}, got week {week}"
                )
            }
            Self::DuplicateSelection { week } => {
                write!(f, "Week {week} is selected more than once")
            }
            Self::WeekUnavailable { week } => {
                write!(f, "Week {week} is not available for selection")
            }
            Self::FourthSlotDisabled => write!(f, "The fourth week slot is disabled"),
            Self::WeekFull { week, capacity } => {
                write!(
                    f,
                    "Week {week} has reached the maximum number of selections ({capacity})"
                )
            }
            Self::InvalidWeek { year, week } => {
                write!(f, "Week {week} does not exist in ISO year {year}")
            }
            Self::InvalidCapacity(capacity) => {
                write!(
                    f,
                    "Invalid capacity per week: {capacity}. Must be greater than 0"
                )
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::EmployeeNotFound(id) => write!(f, "Employee {id} not found"),
            Self::EmployeeInactive(name) => {
                write!(f, "Employee '{name}' has been deactivated")
            }
            Self::ChoiceNotFound(id) => {
                write!(f, "Employee {id} has no saved choice")
            }
        }
    }
}

impl std::error::Error for DomainError {}
