// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use summer_weeks::CommitResult;
use tracing::debug;

use crate::data_models::{encode_week, format_timestamp};
use crate::diesel_schema::choices;
use crate::error::PersistenceError;

/// Writes a committed choice, inserting or overwriting in place.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn write_choice(
    conn: &mut SqliteConnection,
    result: &CommitResult,
) -> Result<(), PersistenceError> {
    let holiday_week: i32 = encode_week(result.choice.holiday_week);
    let additional_week: Option<i32> = result.choice.additional_week.map(encode_week);
    let reserve_week: Option<i32> = result.choice.reserve_week.map(encode_week);
    let fourth_week: Option<i32> = result.choice.fourth_week.map(encode_week);
    let updated_at: String = format_timestamp(result.updated_at)?;

    if result.created {
        diesel::insert_into(choices::table)
            .values((
                choices::employee_id.eq(result.employee_id),
                choices::holiday_week.eq(holiday_week),
                choices::additional_week.eq(additional_week),
                choices::reserve_week.eq(reserve_week),
                choices::fourth_week.eq(fourth_week),
                choices::created_at.eq(format_timestamp(result.created_at)?),
                choices::updated_at.eq(&updated_at),
            ))
            .execute(conn)?;
        debug!(employee_id = result.employee_id, "Inserted choice");
    } else {
        diesel::update(choices::table)
            .filter(choices::employee_id.eq(result.employee_id))
            .set((
                choices::holiday_week.eq(holiday_week),
                choices::additional_week.eq(additional_week),
                choices::reserve_week.eq(reserve_week),
                choices::fourth_week.eq(fourth_week),
                choices::updated_at.eq(&updated_at),
            ))
            .execute(conn)?;
        debug!(employee_id = result.employee_id, "Overwrote choice");
    }

    Ok(())
}

/// Deletes an employee's ledger entry.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no entry existed.
pub fn delete_choice(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(choices::table.filter(choices::employee_id.eq(employee_id)))
            .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Employee {employee_id} has no saved choice"
        )));
    }
    Ok(())
}
