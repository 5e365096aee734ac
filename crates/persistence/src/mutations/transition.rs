// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use summer_weeks::StateChange;
use time::OffsetDateTime;
use tracing::info;

use crate::error::PersistenceError;
use crate::mutations::{
    delete_choice, replace_configuration, set_employee_active, set_week_availability,
    write_choice,
};

/// Writes the change produced by an engine transition.
///
/// # Arguments
///
/// * `conn` - The connection holding the open write transaction
/// * `change` - The change to write
/// * `now` - The timestamp of the transition
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn persist_change(
    conn: &mut SqliteConnection,
    change: &StateChange,
    now: OffsetDateTime,
) -> Result<(), PersistenceError> {
    match change {
        StateChange::ChoiceCommitted(result) => {
            write_choice(conn, result)?;
            info!(
                employee_id = result.employee_id,
                created = result.created,
                weeks = result.choice.weeks().len(),
                "Committed choice"
            );
        }
        StateChange::ConfigurationReplaced(configuration) => {
            replace_configuration(conn, configuration, now)?;
            info!(
                capacity_per_week = configuration.capacity_per_week(),
                fourth_slot_enabled = configuration.fourth_slot_enabled(),
                "Configuration replaced"
            );
        }
        StateChange::WeekAvailabilitySet {
            year,
            week,
            available,
        } => {
            set_week_availability(conn, *year, *week, *available)?;
            info!(year, week = week.value(), available, "Week availability set");
        }
        StateChange::ChoiceDeleted { employee_id } => {
            delete_choice(conn, *employee_id)?;
            info!(employee_id, "Choice deleted");
        }
        StateChange::EmployeeActiveSet {
            employee_id,
            active,
        } => {
            set_employee_active(conn, *employee_id, *active)?;
            info!(employee_id, active, "Employee active flag set");
        }
    }
    Ok(())
}
