// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use summer_weeks::State;
use tracing::debug;

use crate::error::PersistenceError;
use crate::queries::{get_availability, get_configuration, list_choices, list_employees};

/// Assembles the engine snapshot for a year.
///
/// Must run inside the transaction that will commit the transition, so
/// the occupancy it projects cannot change before the write.
///
/// # Errors
///
/// Returns an error if any query fails.
pub fn load_state(conn: &mut SqliteConnection, year: u16) -> Result<State, PersistenceError> {
    let state: State = State {
        year,
        configuration: get_configuration(conn)?,
        availability: get_availability(conn, year)?,
        employees: list_employees(conn)?,
        entries: list_choices(conn)?,
    };

    debug!(
        year,
        employees = state.employees.len(),
        entries = state.entries.len(),
        "Loaded state snapshot"
    );

    Ok(state)
}
