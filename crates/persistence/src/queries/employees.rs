// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use summer_weeks_domain::{Employee, EmployeeName};
use tracing::debug;

use crate::data_models::EmployeeRow;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Looks up an employee by name, ignoring case.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The name to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no employee has this name.
pub fn find_employee_by_name(
    conn: &mut SqliteConnection,
    name: &EmployeeName,
) -> Result<Option<Employee>, PersistenceError> {
    debug!(surname = %name.surname(), given_name = %name.given_name(), "Looking up employee");

    let row: Option<EmployeeRow> = employees::table
        .filter(employees::surname_key.eq(name.surname_key()))
        .filter(employees::given_name_key.eq(name.given_name_key()))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    row.map(Employee::try_from).transpose()
}

/// Retrieves an employee by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee does not exist.
pub fn get_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<Employee>, PersistenceError> {
    let row: Option<EmployeeRow> = employees::table
        .filter(employees::employee_id.eq(employee_id))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    row.map(Employee::try_from).transpose()
}

/// Lists every employee ordered by surname, then given name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(conn: &mut SqliteConnection) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .order((employees::surname_key.asc(), employees::given_name_key.asc()))
        .select(EmployeeRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Employee::try_from).collect()
}
