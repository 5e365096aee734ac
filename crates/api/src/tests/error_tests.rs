// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use summer_weeks::CoreError;
use summer_weeks_domain::{DomainError, WeekNumber};
use summer_weeks_persistence::PersistenceError;

use crate::{
    ApiError, ErrorKind, translate_core_error, translate_domain_error,
    translate_persistence_error,
};

#[test]
fn test_selection_rules_become_rule_violations() {
    let err = translate_domain_error(DomainError::WeekFull {
        week: WeekNumber::new(30),
        capacity: 5,
    });

    assert_eq!(err.kind(), ErrorKind::WeekFull);
    assert_eq!(err.week(), Some(WeekNumber::new(30)));
    assert_eq!(
        err.to_string(),
        "Week 30 has reached the maximum number of selections (5)"
    );

    let err = translate_domain_error(DomainError::FourthSlotDisabled);
    assert_eq!(err.kind(), ErrorKind::FourthSlotDisabled);
    assert_eq!(err.week(), None);
}

#[test]
fn test_holiday_selection_keeps_offending_week() {
    let err = translate_domain_error(DomainError::InvalidHolidaySelection {
        week: Some(WeekNumber::new(33)),
    });

    assert_eq!(err.kind(), ErrorKind::InvalidHolidaySelection);
    assert_eq!(err.week(), Some(WeekNumber::new(33)));
}

#[test]
fn test_missing_records_become_not_found() {
    let err = translate_domain_error(DomainError::EmployeeNotFound(4));
    assert!(matches!(
        err,
        ApiError::ResourceNotFound {
            kind: ErrorKind::EmployeeNotFound,
            ..
        }
    ));

    let err = translate_domain_error(DomainError::ChoiceNotFound(4));
    assert_eq!(err.kind(), ErrorKind::ChoiceNotFound);
}

#[test]
fn test_core_internal_error_stays_internal() {
    let err = translate_core_error(CoreError::Internal(String::from("boom")));
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[test]
fn test_busy_store_is_retryable() {
    let err = translate_persistence_error(PersistenceError::Busy);
    assert_eq!(err.kind(), ErrorKind::Busy);
    assert!(matches!(err, ApiError::Busy { .. }));
}

#[test]
fn test_rejection_keeps_domain_meaning() {
    let err = translate_persistence_error(PersistenceError::Rejected(
        CoreError::DomainViolation(DomainError::WeekUnavailable {
            week: WeekNumber::new(33),
        }),
    ));

    assert_eq!(err.kind(), ErrorKind::WeekUnavailable);
    assert_eq!(err.week(), Some(WeekNumber::new(33)));
}

#[test]
fn test_database_failure_is_internal() {
    let err = translate_persistence_error(PersistenceError::DatabaseError(String::from("disk")));
    assert_eq!(err.kind(), ErrorKind::Internal);
}
