// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::collections::BTreeMap;
use summer_weeks_domain::{Configuration, WeekAvailability, WeekNumber};

use crate::data_models::{SettingsRow, decode_week};
use crate::diesel_schema::{settings, week_availability};
use crate::error::PersistenceError;

/// Identifier of the single settings row.
pub const SETTINGS_ROW_ID: i32 = 1;

/// Retrieves the configuration in effect.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if settings were never seeded, or an
/// error if the database query fails.
pub fn get_configuration(conn: &mut SqliteConnection) -> Result<Configuration, PersistenceError> {
    let row: Option<SettingsRow> = settings::table
        .filter(settings::settings_id.eq(SETTINGS_ROW_ID))
        .select(SettingsRow::as_select())
        .first(conn)
        .optional()?;

    row.map_or_else(
        || {
            Err(PersistenceError::NotFound(String::from(
                "Settings have not been seeded",
            )))
        },
        Configuration::try_from,
    )
}

/// Retrieves the stored availability flags of a year.
///
/// Weeks without a stored row resolve to the static summer-range default.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_availability(
    conn: &mut SqliteConnection,
    year: u16,
) -> Result<WeekAvailability, PersistenceError> {
    let rows: Vec<(i32, i32)> = week_availability::table
        .filter(week_availability::year.eq(i32::from(year)))
        .select((week_availability::week_number, week_availability::is_available))
        .load(conn)?;

    let mut flags: BTreeMap<WeekNumber, bool> = BTreeMap::new();
    for (week_number, is_available) in rows {
        flags.insert(decode_week(week_number)?, is_available != 0);
    }

    Ok(WeekAvailability::with_flags(year, flags))
}
