// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use summer_weeks_domain::ChoiceEntry;

use crate::data_models::ChoiceRow;
use crate::diesel_schema::choices;
use crate::error::PersistenceError;

/// Retrieves the ledger entry owned by an employee.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is invalid.
/// Returns `Ok(None)` if the employee has no entry.
pub fn get_choice(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<ChoiceEntry>, PersistenceError> {
    let row: Option<ChoiceRow> = choices::table
        .filter(choices::employee_id.eq(employee_id))
        .select(ChoiceRow::as_select())
        .first(conn)
        .optional()?;

    row.map(ChoiceEntry::try_from).transpose()
}

/// Lists every ledger entry ordered by employee id.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is invalid.
pub fn list_choices(conn: &mut SqliteConnection) -> Result<Vec<ChoiceEntry>, PersistenceError> {
    let rows: Vec<ChoiceRow> = choices::table
        .order(choices::employee_id.asc())
        .select(ChoiceRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ChoiceEntry::try_from).collect()
}
