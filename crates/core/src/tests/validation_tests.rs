// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for read-only validation functions.

use crate::{State, validate_employee_can_submit, validate_employee_exists};
use summer_weeks_domain::{DomainError, Employee};

use super::helpers::create_test_state;

#[test]
fn test_validate_employee_exists_succeeds() {
    let state: State = create_test_state(5);

    let result: Result<&Employee, DomainError> = validate_employee_exists(&state, 2);

    assert_eq!(result.unwrap().name.full_name(), "Bianchi Luca");
}

#[test]
fn test_validate_employee_exists_fails_for_unknown_id() {
    let state: State = create_test_state(5);

    let result: Result<&Employee, DomainError> = validate_employee_exists(&state, 9999);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::EmployeeNotFound(9999)
    ));
}

#[test]
fn test_validate_employee_can_submit_rejects_inactive() {
    let mut state: State = create_test_state(5);
    state.employees[0].active = false;

    let result: Result<&Employee, DomainError> = validate_employee_can_submit(&state, 1);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::EmployeeInactive(_)
    ));
    assert!(validate_employee_can_submit(&state, 2).is_ok());
}
