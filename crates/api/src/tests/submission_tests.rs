// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, ErrorKind, IdentifyEmployeeRequest, SetEmployeeActiveRequest,
    identify_employee, my_choice, set_employee_active, submit_choice,
};

use super::helpers::{
    TEST_YEAR, create_request, create_test_admin, create_test_employee, setup_test_persistence,
};

#[test]
fn test_first_submission_creates_entry_and_echoes_labels() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");

    let response = submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(Some(32), Some(24), Some(36), None),
    )
    .unwrap();

    assert!(response.ok);
    assert!(response.created);
    assert_eq!(
        response.week_labels,
        vec![
            String::from("Week 32 (03/08 - 09/08)"),
            String::from("Week 24 (08/06 - 14/06)"),
            String::from("Week 36 (31/08 - 06/09)"),
        ]
    );
}

#[test]
fn test_resubmission_replaces_entry() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");

    submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(Some(32), Some(24), None, None),
    )
    .unwrap();
    let response = submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(Some(34), None, None, None),
    )
    .unwrap();

    assert!(!response.created);

    let mine = my_choice(&mut persistence, TEST_YEAR, &employee).unwrap();
    let choice = mine.choice.expect("choice should be saved");
    assert_eq!(choice.holiday_week, 34);
    assert_eq!(choice.additional_week, None);
    assert_eq!(choice.week_labels.len(), 1);
}

#[test]
fn test_full_week_is_reported_with_kind_and_week() {
    let mut persistence = setup_test_persistence(1);
    let first = create_test_employee(&mut persistence, "Rossi", "Mario");
    let second = create_test_employee(&mut persistence, "Bianchi", "Luca");

    submit_choice(
        &mut persistence,
        TEST_YEAR,
        &first,
        create_request(Some(32), Some(25), None, None),
    )
    .unwrap();

    let err = submit_choice(
        &mut persistence,
        TEST_YEAR,
        &second,
        create_request(Some(34), Some(25), None, None),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::WeekFull);
    assert_eq!(err.week().map(|w| w.value()), Some(25));
    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));

    let mine = my_choice(&mut persistence, TEST_YEAR, &second).unwrap();
    assert!(mine.choice.is_none());
}

#[test]
fn test_missing_holiday_week_is_rejected() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");

    let err = submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(None, Some(24), None, None),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidHolidaySelection);
    assert_eq!(err.week(), None);
}

#[test]
fn test_duplicate_week_is_rejected() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");

    let err = submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(Some(32), Some(24), Some(24), None),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DuplicateSelection);
    assert_eq!(err.week().map(|w| w.value()), Some(24));
}

#[test]
fn test_admin_cannot_submit() {
    let mut persistence = setup_test_persistence(5);

    let err = submit_choice(
        &mut persistence,
        TEST_YEAR,
        &create_test_admin(),
        create_request(Some(32), None, None, None),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[test]
fn test_deactivated_employee_cannot_submit_or_identify() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");
    let employee_id = employee.employee_id.unwrap();

    set_employee_active(
        &mut persistence,
        TEST_YEAR,
        &create_test_admin(),
        employee_id,
        SetEmployeeActiveRequest { active: false },
    )
    .unwrap();

    let err = submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(Some(32), None, None, None),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmployeeInactive);

    let err = identify_employee(
        &mut persistence,
        &IdentifyEmployeeRequest {
            surname: String::from("rossi"),
            given_name: String::from("mario"),
        },
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmployeeInactive);
}

#[test]
fn test_identify_ignores_case_and_whitespace() {
    let mut persistence = setup_test_persistence(5);

    let first = identify_employee(
        &mut persistence,
        &IdentifyEmployeeRequest {
            surname: String::from("rossi"),
            given_name: String::from("mario"),
        },
    )
    .unwrap();
    let second = identify_employee(
        &mut persistence,
        &IdentifyEmployeeRequest {
            surname: String::from("  ROSSI "),
            given_name: String::from("Mario"),
        },
    )
    .unwrap();

    assert_eq!(first.employee_id, second.employee_id);
    assert_eq!(first.full_name, "Rossi Mario");
    assert!(first.active);
}

#[test]
fn test_identify_rejects_blank_name() {
    let mut persistence = setup_test_persistence(5);

    let err = identify_employee(
        &mut persistence,
        &IdentifyEmployeeRequest {
            surname: String::from("   "),
            given_name: String::from("Mario"),
        },
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidName);
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_my_choice_is_empty_before_first_submission() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Verdi", "Anna");

    let mine = my_choice(&mut persistence, TEST_YEAR, &employee).unwrap();

    assert_eq!(mine.employee.full_name, "Verdi Anna");
    assert!(mine.choice.is_none());
}

#[test]
fn test_week_beyond_calendar_is_reported_with_its_number() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");

    let err = submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(Some(32), Some(300), None, None),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WeekUnavailable);
    assert_eq!(err.week().map(|w| w.value()), Some(300));

    let err = submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(Some(300), None, None, None),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidHolidaySelection);
    assert_eq!(err.week().map(|w| w.value()), Some(300));
}
