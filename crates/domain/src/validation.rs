// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::is_holiday_week;
use crate::error::DomainError;
use crate::occupancy::Occupancy;
use crate::types::{
    ChoiceSubmission, Configuration, Employee, WeekAvailability, WeekChoice, WeekNumber,
};
use std::collections::HashSet;

/// Validates that the employee may submit choices.
///
/// # Errors
///
/// Returns `DomainError::EmployeeInactive` if the employee was deactivated.
pub fn validate_employee_active(employee: &Employee) -> Result<(), DomainError> {
    if !employee.active {
        return Err(DomainError::EmployeeInactive(employee.name.full_name()));
    }
    Ok(())
}

/// Validates the mandatory holiday slot.
///
/// # Errors
///
/// Returns `DomainError::InvalidHolidaySelection` if the week is missing or
/// is not one of the two holiday-adjacent weeks. The fixed holiday week
/// itself is rejected here too.
pub fn validate_holiday_selection(
    holiday_week: Option<WeekNumber>,
) -> Result<WeekNumber, DomainError> {
    match holiday_week {
        Some(week) if is_holiday_week(week) => Ok(week),
        week => Err(DomainError::InvalidHolidaySelection { week }),
    }
}

/// Validates that no week appears in more than one slot.
///
/// # Errors
///
/// Returns `DomainError::DuplicateSelection` with the first repeated week,
/// whichever two slots collide.
pub fn validate_distinct_weeks(submission: &ChoiceSubmission) -> Result<(), DomainError> {
    let mut seen: HashSet<WeekNumber> = HashSet::new();
    for (_, week) in submission.present_weeks() {
        if !seen.insert(week) {
            return Err(DomainError::DuplicateSelection { week });
        }
    }
    Ok(())
}

/// Validates that every present week is selectable.
///
/// # Errors
///
/// Returns `DomainError::WeekUnavailable` for the first week (in slot order)
/// that is outside the summer range or flagged unavailable.
pub fn validate_weeks_available(
    submission: &ChoiceSubmission,
    availability: &WeekAvailability,
) -> Result<(), DomainError> {
    for (_, week) in submission.present_weeks() {
        if !availability.is_selectable(week) {
            return Err(DomainError::WeekUnavailable { week });
        }
    }
    Ok(())
}

/// Validates the fourth slot against the configuration.
///
/// # Errors
///
/// Returns `DomainError::FourthSlotDisabled` if a fourth week is present
/// while the slot is disabled.
pub fn validate_fourth_slot(
    submission: &ChoiceSubmission,
    configuration: &Configuration,
) -> Result<(), DomainError> {
    if submission.fourth_week.is_some() && !configuration.fourth_slot_enabled() {
        return Err(DomainError::FourthSlotDisabled);
    }
    Ok(())
}

/// Validates that every week of the choice still has room.
///
/// `others` must already exclude the submitter's own prior entry, so that a
/// resubmission is measured against everyone else.
///
/// # Errors
///
/// Returns `DomainError::WeekFull` for the first week (in slot order) whose
/// occupancy has reached capacity.
pub fn validate_capacity(
    choice: &WeekChoice,
    others: &Occupancy,
    configuration: &Configuration,
) -> Result<(), DomainError> {
    let capacity: u32 = configuration.capacity_per_week();
    for (_, week) in choice.weeks() {
        if others.total(week) >= capacity {
            return Err(DomainError::WeekFull { week, capacity });
        }
    }
    Ok(())
}

/// Runs the full validation sequence for a submission.
///
/// The order is fixed: holiday slot, distinctness, availability, fourth
/// slot, capacity. The first failing rule is reported.
///
/// # Arguments
///
/// * `submission` - The proposed weeks
/// * `configuration` - The configuration in effect
/// * `availability` - The availability flags in effect
/// * `others` - Occupancy of every other employee's entry
///
/// # Errors
///
/// Returns the error of the first failing rule.
pub fn validate_choice(
    submission: &ChoiceSubmission,
    configuration: &Configuration,
    availability: &WeekAvailability,
    others: &Occupancy,
) -> Result<WeekChoice, DomainError> {
    let holiday_week: WeekNumber = validate_holiday_selection(submission.holiday_week)?;
    validate_distinct_weeks(submission)?;
    validate_weeks_available(submission, availability)?;
    validate_fourth_slot(submission, configuration)?;

    let choice: WeekChoice = WeekChoice {
        holiday_week,
        additional_week: submission.additional_week,
        reserve_week: submission.reserve_week,
        fourth_week: submission.fourth_week,
    };

    validate_capacity(&choice, others, configuration)?;
    Ok(choice)
}
