// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ErrorKind, SetFourthSlotRequest, admin_overview, dashboard, set_fourth_slot_enabled,
    submit_choice, week_overview,
};

use super::helpers::{
    TEST_YEAR, create_request, create_test_admin, create_test_employee, setup_test_persistence,
};

#[test]
fn test_week_overview_lists_every_summer_week() {
    let mut persistence = setup_test_persistence(2);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");
    submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(Some(32), Some(24), Some(36), None),
    )
    .unwrap();

    let overview = week_overview(&mut persistence, TEST_YEAR).unwrap();

    assert_eq!(overview.year, TEST_YEAR);
    assert_eq!(overview.weeks.len(), 15);
    assert!(overview.weeks.iter().all(|w| w.week_number != 33));

    let week_24 = overview.weeks.iter().find(|w| w.week_number == 24).unwrap();
    assert_eq!(week_24.start, "2026-06-08");
    assert_eq!(week_24.end, "2026-06-14");
    assert_eq!(week_24.category, "before");
    assert_eq!(week_24.occupancy_by_type.additional, 1);
    assert_eq!(week_24.occupancy_by_type.total, 1);
    assert_eq!(week_24.fill_percent, 50);
    assert!(!week_24.full);

    let week_36 = overview.weeks.iter().find(|w| w.week_number == 36).unwrap();
    assert_eq!(week_36.category, "after");
    assert_eq!(week_36.occupancy_by_type.reserve, 1);
}

#[test]
fn test_dashboard_splits_weeks_around_holiday() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");

    let view = dashboard(&mut persistence, TEST_YEAR, &employee).unwrap();

    let holiday: Vec<u16> = view.holiday_weeks.iter().map(|w| w.week_number).collect();
    assert_eq!(holiday, vec![32, 34]);
    assert_eq!(view.weeks_before.len(), 10);
    assert_eq!(view.weeks_after.len(), 5);
    assert!(view.weeks_before.iter().all(|w| w.week_number < 33));
    assert!(view.weeks_after.iter().all(|w| w.week_number > 33));
    assert!(view.fourth_slot_offerable);
    assert!(view.my_choice.is_none());
}

#[test]
fn test_dashboard_includes_own_choice() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");
    submit_choice(
        &mut persistence,
        TEST_YEAR,
        &employee,
        create_request(Some(34), None, None, Some(37)),
    )
    .unwrap();

    let view = dashboard(&mut persistence, TEST_YEAR, &employee).unwrap();

    let mine = view.my_choice.unwrap();
    assert_eq!(mine.holiday_week, 34);
    assert_eq!(mine.fourth_week, Some(37));
}

#[test]
fn test_dashboard_hides_fourth_slot_when_disabled() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");
    set_fourth_slot_enabled(
        &mut persistence,
        TEST_YEAR,
        &create_test_admin(),
        SetFourthSlotRequest { enabled: false },
    )
    .unwrap();

    let view = dashboard(&mut persistence, TEST_YEAR, &employee).unwrap();

    assert!(!view.fourth_slot_enabled);
    assert!(!view.fourth_slot_offerable);
}

#[test]
fn test_admin_overview_shows_rosters_and_counts() {
    let mut persistence = setup_test_persistence(5);
    let rossi = create_test_employee(&mut persistence, "Rossi", "Mario");
    let bianchi = create_test_employee(&mut persistence, "Bianchi", "Luca");
    create_test_employee(&mut persistence, "Verdi", "Anna");

    submit_choice(
        &mut persistence,
        TEST_YEAR,
        &rossi,
        create_request(Some(32), Some(24), None, None),
    )
    .unwrap();
    submit_choice(
        &mut persistence,
        TEST_YEAR,
        &bianchi,
        create_request(Some(32), None, Some(24), None),
    )
    .unwrap();

    let board = admin_overview(&mut persistence, TEST_YEAR, &create_test_admin()).unwrap();

    assert_eq!(board.completed_count, 2);
    assert_eq!(board.active_employee_count, 3);
    assert_eq!(board.weeks.len(), 15);

    let week_32 = board.weeks.iter().find(|r| r.week.week_number == 32).unwrap();
    assert_eq!(
        week_32.roster.holiday,
        vec![String::from("Bianchi Luca"), String::from("Rossi Mario")]
    );
    assert_eq!(week_32.week.occupancy_by_type.holiday, 2);

    let week_24 = board.weeks.iter().find(|r| r.week.week_number == 24).unwrap();
    assert_eq!(week_24.roster.additional, vec![String::from("Rossi Mario")]);
    assert_eq!(week_24.roster.reserve, vec![String::from("Bianchi Luca")]);

    let names: Vec<&str> = board
        .employees
        .iter()
        .map(|row| row.employee.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Bianchi Luca", "Rossi Mario", "Verdi Anna"]);
    assert!(board.employees[2].choice.is_none());
}

#[test]
fn test_admin_overview_rejects_employee() {
    let mut persistence = setup_test_persistence(5);
    let employee = create_test_employee(&mut persistence, "Rossi", "Mario");

    let err = admin_overview(&mut persistence, TEST_YEAR, &employee).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}
