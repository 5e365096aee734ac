// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use summer_weeks_domain::Configuration;
use summer_weeks_persistence::Persistence;

use crate::{
    AuthenticatedActor, IdentifyEmployeeRequest, SubmitChoiceRequest, identify_employee,
};

pub const TEST_YEAR: u16 = 2026;

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::admin()
}

/// An in-memory store seeded for `TEST_YEAR`.
pub fn setup_test_persistence(capacity: u32) -> Persistence {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory store");
    persistence
        .seed(
            TEST_YEAR,
            &Configuration::new(capacity, true, String::new()).unwrap(),
        )
        .expect("Failed to seed store");
    persistence
}

/// Identifies an employee and returns an actor acting as them.
pub fn create_test_employee(
    persistence: &mut Persistence,
    surname: &str,
    given_name: &str,
) -> AuthenticatedActor {
    let info = identify_employee(
        persistence,
        &IdentifyEmployeeRequest {
            surname: String::from(surname),
            given_name: String::from(given_name),
        },
    )
    .expect("Failed to identify employee");
    AuthenticatedActor::employee(info.employee_id)
}

pub const fn create_request(
    holiday: Option<u16>,
    additional: Option<u16>,
    reserve: Option<u16>,
    fourth: Option<u16>,
) -> SubmitChoiceRequest {
    SubmitChoiceRequest {
        holiday_week: holiday,
        additional_week: additional,
        reserve_week: reserve,
        fourth_week: fourth,
    }
}
