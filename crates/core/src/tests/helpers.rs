// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, State, TransitionResult, apply};
use summer_weeks_domain::{ChoiceSubmission, Configuration, Employee, EmployeeName, WeekNumber};
use time::OffsetDateTime;
use time::macros::datetime;

pub const TEST_YEAR: u16 = 2026;

pub fn week(value: u16) -> WeekNumber {
    WeekNumber::new(value)
}

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2026-03-01 09:00 UTC)
}

pub fn create_test_employee(employee_id: i64, surname: &str, given_name: &str) -> Employee {
    Employee::with_id(
        employee_id,
        EmployeeName::new(surname, given_name).unwrap(),
        true,
    )
}

/// A state with three active employees (ids 1..=3) and the given capacity.
pub fn create_test_state(capacity: u32) -> State {
    let mut state: State = State::new(TEST_YEAR);
    state.configuration = Configuration::new(capacity, true, String::new()).unwrap();
    state.employees = vec![
        create_test_employee(1, "Rossi", "Mario"),
        create_test_employee(2, "Bianchi", "Luca"),
        create_test_employee(3, "Verdi", "Anna"),
    ];
    state
}

pub fn submission(
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

pub fn submit(
    state: &State,
    employee_id: i64,
    submission: ChoiceSubmission,
) -> Result<TransitionResult, CoreError> {
    apply(
        state,
        Command::SubmitChoice {
            employee_id,
            submission,
        },
        create_test_now(),
    )
}
