// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_entry, create_test_name, week};
use crate::{
    ChoiceSubmission, Configuration, DomainError, Employee, FIXED_HOLIDAY_WEEK, Occupancy,
    WeekAvailability, WeekChoice, validate_choice, validate_distinct_weeks,
    validate_employee_active, validate_holiday_selection,
};

fn submission(
    holiday: Option<u16>,
    additional: Option<u16>,
    reserve: Option<u16>,
    fourth: Option<u16>,
) -> ChoiceSubmission {
    ChoiceSubmission {
        holiday_week: holiday.map(week),
        additional_week: additional.map(week),
        reserve_week: reserve.map(week),
        fourth_week: fourth.map(week),
    }
}

fn configuration(capacity: u32, fourth_enabled: bool) -> Configuration {
    Configuration::new(capacity, fourth_enabled, String::new()).unwrap()
}

#[test]
fn test_holiday_selection_accepts_only_adjacent_weeks() {
    assert_eq!(validate_holiday_selection(Some(week(32))), Ok(week(32)));
    assert_eq!(validate_holiday_selection(Some(week(34))), Ok(week(34)));
}

#[test]
fn test_holiday_selection_rejects_fixed_holiday_week() {
    assert_eq!(
        validate_holiday_selection(Some(FIXED_HOLIDAY_WEEK)),
        Err(DomainError::InvalidHolidaySelection {
            week: Some(FIXED_HOLIDAY_WEEK)
        })
    );
}

#[test]
fn test_holiday_selection_rejects_missing_and_other_weeks() {
    assert_eq!(
        validate_holiday_selection(None),
        Err(DomainError::InvalidHolidaySelection { week: None })
    );
    assert!(validate_holiday_selection(Some(week(31))).is_err());
    assert!(validate_holiday_selection(Some(week(24))).is_err());
}

#[test]
fn test_duplicates_rejected_for_every_slot_pair() {
    let cases: [ChoiceSubmission; 6] = [
        submission(Some(32), Some(32), None, None),
        submission(Some(32), None, Some(32), None),
        submission(Some(32), None, None, Some(32)),
        submission(Some(32), Some(25), Some(25), None),
        submission(Some(32), Some(25), None, Some(25)),
        submission(Some(32), None, Some(26), Some(26)),
    ];

    for case in &cases {
        assert!(
            matches!(
                validate_distinct_weeks(case),
                Err(DomainError::DuplicateSelection { .. })
            ),
            "expected duplicate rejection for {case:?}"
        );
    }
}

#[test]
fn test_validate_choice_accepts_full_submission() {
    let result: Result<WeekChoice, DomainError> = validate_choice(
        &submission(Some(32), Some(24), Some(25), Some(36)),
        &configuration(2, true),
        &WeekAvailability::new(2026),
        &Occupancy::new(),
    );

    let choice: WeekChoice = result.unwrap();
    assert_eq!(choice.holiday_week, week(32));
    assert_eq!(choice.fourth_week, Some(week(36)));
}

#[test]
fn test_validate_choice_checks_holiday_before_duplicates() {
    let result: Result<WeekChoice, DomainError> = validate_choice(
        &submission(Some(33), Some(24), Some(24), None),
        &configuration(2, true),
        &WeekAvailability::new(2026),
        &Occupancy::new(),
    );
    assert!(matches!(
        result,
        Err(DomainError::InvalidHolidaySelection { .. })
    ));
}

#[test]
fn test_validate_choice_rejects_unavailable_week() {
    let mut availability: WeekAvailability = WeekAvailability::new(2026);
    availability.set(week(24), false);

    let result: Result<WeekChoice, DomainError> = validate_choice(
        &submission(Some(32), Some(24), None, None),
        &configuration(2, true),
        &availability,
        &Occupancy::new(),
    );
    assert_eq!(result, Err(DomainError::WeekUnavailable { week: week(24) }));
}

#[test]
fn test_validate_choice_rejects_unavailable_holiday_week() {
    let mut availability: WeekAvailability = WeekAvailability::new(2026);
    availability.set(week(34), false);

    let result: Result<WeekChoice, DomainError> = validate_choice(
        &submission(Some(34), None, None, None),
        &configuration(2, true),
        &availability,
        &Occupancy::new(),
    );
    assert_eq!(result, Err(DomainError::WeekUnavailable { week: week(34) }));
}

#[test]
fn test_validate_choice_rejects_weeks_outside_summer_range() {
    for outside in [FIXED_HOLIDAY_WEEK.value(), 22, 39, 0, 60] {
        let result: Result<WeekChoice, DomainError> = validate_choice(
            &submission(Some(32), Some(outside), None, None),
            &configuration(2, true),
            &WeekAvailability::new(2026),
            &Occupancy::new(),
        );
        assert_eq!(
            result,
            Err(DomainError::WeekUnavailable {
                week: week(outside)
            })
        );
    }
}

#[test]
fn test_validate_choice_rejects_fourth_week_when_disabled() {
    let result: Result<WeekChoice, DomainError> = validate_choice(
        &submission(Some(32), None, None, Some(36)),
        &configuration(2, false),
        &WeekAvailability::new(2026),
        &Occupancy::new(),
    );
    assert_eq!(result, Err(DomainError::FourthSlotDisabled));
}

#[test]
fn test_validate_choice_rejects_full_week() {
    let mut others: Occupancy = Occupancy::new();
    others.add_choice(&WeekChoice {
        holiday_week: week(32),
        additional_week: Some(week(24)),
        reserve_week: None,
        fourth_week: None,
    });
    others.add_choice(&WeekChoice {
        holiday_week: week(34),
        additional_week: Some(week(24)),
        reserve_week: None,
        fourth_week: None,
    });

    let result: Result<WeekChoice, DomainError> = validate_choice(
        &submission(Some(32), Some(24), None, None),
        &configuration(2, true),
        &WeekAvailability::new(2026),
        &others,
    );
    // Week 32 holds one reference, week 24 holds two: the first full week is 24.
    assert_eq!(
        result,
        Err(DomainError::WeekFull {
            week: week(24),
            capacity: 2
        })
    );
}

#[test]
fn test_resubmission_is_measured_without_own_entry() {
    let own: WeekChoice = WeekChoice {
        holiday_week: week(32),
        additional_week: Some(week(24)),
        reserve_week: None,
        fourth_week: None,
    };
    let other: WeekChoice = WeekChoice::holiday_only(week(34));
    let entries = vec![create_test_entry(1, own), create_test_entry(2, other)];
    let occupancy: Occupancy = Occupancy::from_entries(&entries);

    // Capacity 1: weeks 24 and 32 are full only because of the submitter.
    let result: Result<WeekChoice, DomainError> = validate_choice(
        &submission(Some(32), Some(24), Some(25), None),
        &configuration(1, true),
        &WeekAvailability::new(2026),
        &occupancy.excluding(Some(&own)),
    );
    assert!(result.is_ok());
}

#[test]
fn test_inactive_employee_rejected() {
    let mut employee: Employee = Employee::with_id(1, create_test_name(), true);
    assert!(validate_employee_active(&employee).is_ok());

    employee.active = false;
    assert_eq!(
        validate_employee_active(&employee),
        Err(DomainError::EmployeeInactive(String::from("Rossi Mario")))
    );
}
