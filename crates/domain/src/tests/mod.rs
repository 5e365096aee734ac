// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod validation;

use crate::{ChoiceEntry, EmployeeName, WeekChoice, WeekNumber};
use time::OffsetDateTime;

pub fn week(value: u16) -> WeekNumber {
    WeekNumber::new(value)
}

pub fn create_test_name() -> EmployeeName {
    EmployeeName::new("Rossi", "Mario").unwrap()
}

pub fn create_test_entry(employee_id: i64, choice: WeekChoice) -> ChoiceEntry {
    ChoiceEntry {
        employee_id,
        choice,
        created_at: OffsetDateTime::UNIX_EPOCH,
        updated_at: OffsetDateTime::UNIX_EPOCH,
    }
}
