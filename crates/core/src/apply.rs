// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CommitResult, State, StateChange, TransitionResult};
use crate::{validate_employee_can_submit, validate_employee_exists};
use summer_weeks_domain::{
    ChoiceEntry, ChoiceSubmission, Configuration, DomainError, Occupancy, WeekChoice, WeekNumber,
    validate_choice, week_info,
};
use time::OffsetDateTime;

/// Applies a command to the current state, producing a new state and the
/// change the store must write.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `now` - The commit timestamp
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the change
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command violates domain rules
/// - The referenced employee or ledger entry does not exist
pub fn apply(
    state: &State,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SubmitChoice {
            employee_id,
            submission,
        } => submit_choice(state, employee_id, &submission, now),
        Command::SetCapacity { capacity } => {
            let configuration: Configuration = Configuration::new(
                capacity,
                state.configuration.fourth_slot_enabled(),
                state.configuration.note().to_string(),
            )?;
            Ok(replace_configuration(state, configuration))
        }
        Command::SetFourthSlotEnabled { enabled } => {
            let configuration: Configuration = Configuration::new(
                state.configuration.capacity_per_week(),
                enabled,
                state.configuration.note().to_string(),
            )?;
            Ok(replace_configuration(state, configuration))
        }
        Command::UpdateSettings {
            capacity,
            fourth_slot_enabled,
            note,
        } => {
            let configuration: Configuration =
                Configuration::new(capacity, fourth_slot_enabled, note)?;
            Ok(replace_configuration(state, configuration))
        }
        Command::SetWeekAvailability { week, available } => {
            // Any ISO week of the year may be flagged; selection still
            // requires the summer range.
            week_info(state.year, week)?;

            let mut new_state: State = state.clone();
            new_state.availability.set(week, available);

            Ok(TransitionResult {
                new_state,
                change: StateChange::WeekAvailabilitySet {
                    year: state.year,
                    week,
                    available,
                },
            })
        }
        Command::DeleteChoice { employee_id } => {
            if state.entry_for(employee_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::ChoiceNotFound(
                    employee_id,
                )));
            }

            let mut new_state: State = state.clone();
            new_state.entries.retain(|e| e.employee_id != employee_id);

            Ok(TransitionResult {
                new_state,
                change: StateChange::ChoiceDeleted { employee_id },
            })
        }
        Command::SetEmployeeActive {
            employee_id,
            active,
        } => {
            validate_employee_exists(state, employee_id)?;

            let mut new_state: State = state.clone();
            for employee in &mut new_state.employees {
                if employee.employee_id == Some(employee_id) {
                    employee.active = active;
                }
            }

            Ok(TransitionResult {
                new_state,
                change: StateChange::EmployeeActiveSet {
                    employee_id,
                    active,
                },
            })
        }
    }
}

fn replace_configuration(state: &State, configuration: Configuration) -> TransitionResult {
    let mut new_state: State = state.clone();
    new_state.configuration = configuration.clone();
    TransitionResult {
        new_state,
        change: StateChange::ConfigurationReplaced(configuration),
    }
}

fn submit_choice(
    state: &State,
    employee_id: i64,
    submission: &ChoiceSubmission,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    validate_employee_can_submit(state, employee_id)?;

    let previous: Option<&ChoiceEntry> = state.entry_for(employee_id);
    let others: Occupancy = state.occupancy().excluding(previous.map(|e| &e.choice));

    let choice: WeekChoice = validate_choice(
        submission,
        &state.configuration,
        &state.availability,
        &others,
    )?;

    let week_labels: Vec<String> = choice
        .weeks()
        .into_iter()
        .map(|(_, week)| week_label(state.year, week))
        .collect::<Result<Vec<String>, CoreError>>()?;

    let created_at: OffsetDateTime = previous.map_or(now, |e| e.created_at);
    let entry: ChoiceEntry = ChoiceEntry {
        employee_id,
        choice,
        created_at,
        updated_at: now,
    };

    let mut new_state: State = state.clone();
    new_state.entries.retain(|e| e.employee_id != employee_id);
    new_state.entries.push(entry);

    Ok(TransitionResult {
        new_state,
        change: StateChange::ChoiceCommitted(CommitResult {
            employee_id,
            choice,
            created: previous.is_none(),
            created_at,
            updated_at: now,
            week_labels,
        }),
    })
}

fn week_label(year: u16, week: WeekNumber) -> Result<String, CoreError> {
    week_info(year, week)
        .map(|info| info.label())
        .map_err(|err| CoreError::Internal(format!("Week has no calendar entry: {err}")))
}
