// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod occupancy;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{
    FIXED_HOLIDAY_WEEK, POST_HOLIDAY_WEEK, PRE_HOLIDAY_WEEK, WEEKS_AFTER_HOLIDAY,
    WEEKS_BEFORE_HOLIDAY, WeekCategory, WeekInfo, holiday_weeks, is_holiday_week, is_summer_week,
    summer_weeks, week_info, weeks_in_year,
};
pub use error::DomainError;
pub use occupancy::{Occupancy, WeekOccupancy, WeekRoster, fourth_slot_offerable, roster_by_week};
pub use types::{
    ChoiceEntry, ChoiceSubmission, Configuration, DEFAULT_CAPACITY_PER_WEEK, Employee,
    EmployeeName, Slot, WeekAvailability, WeekChoice, WeekNumber,
};
pub use validation::{
    validate_capacity, validate_choice, validate_distinct_weeks, validate_employee_active,
    validate_fourth_slot, validate_holiday_selection, validate_weeks_available,
};
