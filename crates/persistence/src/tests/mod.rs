// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use summer_weeks_domain::{ChoiceSubmission, Configuration, Employee, EmployeeName, WeekNumber};

use crate::Persistence;

pub const TEST_YEAR: u16 = 2026;

static TEMP_DB_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn week(value: u16) -> WeekNumber {
    WeekNumber::new(value)
}

pub fn create_test_configuration(capacity: u32) -> Configuration {
    Configuration::new(capacity, true, String::new()).unwrap()
}

/// An in-memory store seeded for `TEST_YEAR`.
pub fn create_test_persistence(capacity: u32) -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .seed(TEST_YEAR, &create_test_configuration(capacity))
        .unwrap();
    persistence
}

pub fn create_test_employee(
    persistence: &mut Persistence,
    surname: &str,
    given_name: &str,
) -> Employee {
    persistence
        .identify_employee(&EmployeeName::new(surname, given_name).unwrap())
        .unwrap()
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

/// A temporary database file that is removed (with its WAL files) on drop.
pub struct TempDatabase {
    pub path: PathBuf,
}

impl TempDatabase {
    pub fn new(label: &str) -> Self {
        let id: u64 = TEMP_DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path: PathBuf = std::env::temp_dir().join(format!(
            "summer_weeks_{label}_{}_{id}.db",
            std::process::id()
        ));
        Self { path }
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        let base: String = self.path.display().to_string();
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{base}{suffix}"));
        }
    }
}
