// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use summer_weeks_domain::{Employee, EmployeeName};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::data_models::{encode_flag, format_timestamp};
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Creates a new active employee.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The normalized employee name
/// * `now` - The creation timestamp
///
/// # Errors
///
/// Returns an error if the insert fails, including when another employee
/// already has the same name.
pub fn insert_employee(
    conn: &mut SqliteConnection,
    name: &EmployeeName,
    now: OffsetDateTime,
) -> Result<Employee, PersistenceError> {
    let employee_id: i64 = diesel::insert_into(employees::table)
        .values((
            employees::surname.eq(name.surname()),
            employees::given_name.eq(name.given_name()),
            employees::surname_key.eq(name.surname_key()),
            employees::given_name_key.eq(name.given_name_key()),
            employees::is_active.eq(encode_flag(true)),
            employees::created_at.eq(format_timestamp(now)?),
        ))
        .returning(employees::employee_id)
        .get_result(conn)?;

    info!(employee_id, name = %name, "Employee created");

    Ok(Employee::with_id(employee_id, name.clone(), true))
}

/// Sets an employee's active flag.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was updated.
pub fn set_employee_active(
    conn: &mut SqliteConnection,
    employee_id: i64,
    active: bool,
) -> Result<(), PersistenceError> {
    debug!(employee_id, active, "Updating employee active flag");

    let updated: usize = diesel::update(employees::table)
        .filter(employees::employee_id.eq(employee_id))
        .set(employees::is_active.eq(encode_flag(active)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Employee {employee_id} not found"
        )));
    }
    Ok(())
}
