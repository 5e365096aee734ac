// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use summer_weeks_domain::{Configuration, WeekAvailability, WeekNumber};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::data_models::{encode_flag, encode_week, format_timestamp};
use crate::diesel_schema::{settings, week_availability};
use crate::error::PersistenceError;
use crate::queries::settings::SETTINGS_ROW_ID;

fn capacity_column(configuration: &Configuration) -> Result<i32, PersistenceError> {
    i32::try_from(configuration.capacity_per_week()).map_err(|_| {
        PersistenceError::Other(format!(
            "Capacity {} is too large to store",
            configuration.capacity_per_week()
        ))
    })
}

/// Inserts the settings row unless it already exists.
///
/// # Returns
///
/// `true` if the row was inserted.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn seed_settings(
    conn: &mut SqliteConnection,
    defaults: &Configuration,
    now: OffsetDateTime,
) -> Result<bool, PersistenceError> {
    let inserted: usize = diesel::insert_or_ignore_into(settings::table)
        .values((
            settings::settings_id.eq(SETTINGS_ROW_ID),
            settings::capacity_per_week.eq(capacity_column(defaults)?),
            settings::fourth_slot_enabled.eq(encode_flag(defaults.fourth_slot_enabled())),
            settings::note.eq(defaults.note()),
            settings::updated_at.eq(format_timestamp(now)?),
        ))
        .execute(conn)?;

    if inserted > 0 {
        info!(
            capacity_per_week = defaults.capacity_per_week(),
            fourth_slot_enabled = defaults.fourth_slot_enabled(),
            "Seeded settings"
        );
    }
    Ok(inserted > 0)
}

/// Inserts a row for every ISO week of the year that has none.
///
/// Existing rows are never overwritten.
///
/// # Returns
///
/// The number of rows inserted.
///
/// # Errors
///
/// Returns an error if an insert fails.
pub fn seed_week_availability(
    conn: &mut SqliteConnection,
    year: u16,
) -> Result<usize, PersistenceError> {
    let defaults: WeekAvailability = WeekAvailability::new(year);
    let mut inserted: usize = 0;

    for (week, available) in defaults.resolved() {
        inserted += diesel::insert_or_ignore_into(week_availability::table)
            .values((
                week_availability::year.eq(i32::from(year)),
                week_availability::week_number.eq(encode_week(week)),
                week_availability::is_available.eq(encode_flag(available)),
            ))
            .execute(conn)?;
    }

    if inserted > 0 {
        info!(year, inserted, "Seeded week availability");
    }
    Ok(inserted)
}

/// Replaces the settings row wholesale.
///
/// # Errors
///
/// Returns an error if the update fails or settings were never seeded.
pub fn replace_configuration(
    conn: &mut SqliteConnection,
    configuration: &Configuration,
    now: OffsetDateTime,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(settings::table)
        .filter(settings::settings_id.eq(SETTINGS_ROW_ID))
        .set((
            settings::capacity_per_week.eq(capacity_column(configuration)?),
            settings::fourth_slot_enabled.eq(encode_flag(configuration.fourth_slot_enabled())),
            settings::note.eq(configuration.note()),
            settings::updated_at.eq(format_timestamp(now)?),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(String::from(
            "Settings have not been seeded",
        )));
    }

    debug!(
        capacity_per_week = configuration.capacity_per_week(),
        fourth_slot_enabled = configuration.fourth_slot_enabled(),
        "Replaced configuration"
    );
    Ok(())
}

/// Sets one week's availability flag, creating the row if needed.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn set_week_availability(
    conn: &mut SqliteConnection,
    year: u16,
    week: WeekNumber,
    available: bool,
) -> Result<(), PersistenceError> {
    diesel::replace_into(week_availability::table)
        .values((
            week_availability::year.eq(i32::from(year)),
            week_availability::week_number.eq(encode_week(week)),
            week_availability::is_available.eq(encode_flag(available)),
        ))
        .execute(conn)?;

    debug!(year, week = week.value(), available, "Set week availability");
    Ok(())
}
