// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::collections::BTreeMap;
use summer_weeks::{Command, CommitResult, State, TransitionResult};
use summer_weeks_domain::{
    ChoiceEntry, ChoiceSubmission, Configuration, DomainError, Employee, EmployeeName, Occupancy,
    WeekAvailability, WeekCategory, WeekInfo, WeekNumber, WeekOccupancy, WeekRoster,
    holiday_weeks, roster_by_week, summer_weeks, week_info,
};
use summer_weeks_persistence::Persistence;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AdminEmployeeRow, AdminOverviewResponse, AdminWeekRow, ChoiceInfo, DashboardResponse,
    DeleteChoiceResponse, EmployeeActiveResponse, EmployeeInfo, IdentifyEmployeeRequest,
    MyChoiceResponse, OccupancyByType, SetCapacityRequest, SetEmployeeActiveRequest,
    SetFourthSlotRequest, SetWeekAvailabilityRequest, SettingsResponse, SubmitChoiceRequest,
    SubmitChoiceResponse, UpdateSettingsRequest, WeekAvailabilityResponse, WeekOverviewEntry,
    WeekOverviewResponse, WeekRosterInfo,
};

// ============================================================================
// View helpers
// ============================================================================

/// Formats a timestamp as RFC 3339.
///
/// # Errors
///
/// Returns an internal error if the timestamp cannot be formatted.
fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, ApiError> {
    timestamp.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}

/// Looks up a calendar week that is known to be valid for the year.
///
/// # Errors
///
/// Returns an internal error if stored data references a week outside the
/// calendar.
fn stored_week_info(year: u16, week: WeekNumber) -> Result<WeekInfo, ApiError> {
    week_info(year, week).map_err(|e| ApiError::Internal {
        message: format!("Stored week is outside the calendar: {e}"),
    })
}

fn employee_info(employee: &Employee) -> Result<EmployeeInfo, ApiError> {
    let employee_id: i64 = employee.employee_id.ok_or_else(|| ApiError::Internal {
        message: format!(
            "Employee '{}' loaded from database is missing employee_id",
            employee.name
        ),
    })?;

    Ok(EmployeeInfo {
        employee_id,
        surname: employee.name.surname().to_string(),
        given_name: employee.name.given_name().to_string(),
        full_name: employee.name.full_name(),
        active: employee.active,
    })
}

fn choice_info(year: u16, entry: &ChoiceEntry) -> Result<ChoiceInfo, ApiError> {
    let week_labels: Vec<String> = entry
        .choice
        .weeks()
        .into_iter()
        .map(|(_, week)| stored_week_info(year, week).map(|info| info.label()))
        .collect::<Result<Vec<String>, ApiError>>()?;

    Ok(ChoiceInfo {
        employee_id: entry.employee_id,
        holiday_week: entry.choice.holiday_week.value(),
        additional_week: entry.choice.additional_week.map(|w| w.value()),
        reserve_week: entry.choice.reserve_week.map(|w| w.value()),
        fourth_week: entry.choice.fourth_week.map(|w| w.value()),
        week_labels,
        created_at: format_timestamp(entry.created_at)?,
        updated_at: format_timestamp(entry.updated_at)?,
    })
}

const fn occupancy_by_type(counts: &WeekOccupancy) -> OccupancyByType {
    OccupancyByType {
        holiday: counts.holiday,
        additional: counts.additional,
        reserve: counts.reserve,
        fourth: counts.fourth,
        total: counts.total,
    }
}

fn week_overview_entry(
    year: u16,
    week: WeekNumber,
    configuration: &Configuration,
    availability: &WeekAvailability,
    occupancy: &Occupancy,
) -> Result<WeekOverviewEntry, ApiError> {
    let info: WeekInfo = stored_week_info(year, week)?;
    let counts: WeekOccupancy = occupancy.week(week);
    let capacity: u32 = configuration.capacity_per_week();

    Ok(WeekOverviewEntry {
        week_number: week.value(),
        start: info.start.to_string(),
        end: info.end.to_string(),
        label: info.label(),
        category: info.category.as_str().to_string(),
        available: availability.is_available(week),
        capacity,
        occupancy_by_type: occupancy_by_type(&counts),
        full: counts.is_full(capacity),
        fill_percent: counts.fill_percent(capacity),
    })
}

fn summer_overview(
    state: &State,
    occupancy: &Occupancy,
) -> Result<Vec<WeekOverviewEntry>, ApiError> {
    summer_weeks()
        .map(|week| {
            week_overview_entry(
                state.year,
                week,
                &state.configuration,
                &state.availability,
                occupancy,
            )
        })
        .collect()
}

fn settings_response(configuration: &Configuration, message: String) -> SettingsResponse {
    SettingsResponse {
        capacity_per_week: configuration.capacity_per_week(),
        fourth_slot_enabled: configuration.fourth_slot_enabled(),
        note: configuration.note().to_string(),
        message,
    }
}

fn execute(
    persistence: &mut Persistence,
    year: u16,
    command: Command,
) -> Result<TransitionResult, ApiError> {
    persistence
        .execute(year, command)
        .map_err(translate_persistence_error)
}

fn load_state(persistence: &mut Persistence, year: u16) -> Result<State, ApiError> {
    persistence
        .load_state(year)
        .map_err(translate_persistence_error)
}

// ============================================================================
// Employee operations
// ============================================================================

/// Identifies an employee by name, registering them on first use.
///
/// The lookup ignores case and surrounding whitespace.
///
/// # Errors
///
/// Returns an error if:
/// - Either name part is blank (`InvalidName`)
/// - The employee has been deactivated (`EmployeeInactive`)
/// - The store fails
pub fn identify_employee(
    persistence: &mut Persistence,
    request: &IdentifyEmployeeRequest,
) -> Result<EmployeeInfo, ApiError> {
    let name: EmployeeName = EmployeeName::new(&request.surname, &request.given_name)
        .map_err(translate_domain_error)?;

    let employee: Employee = persistence
        .identify_employee(&name)
        .map_err(translate_persistence_error)?;

    info!(
        employee_id = ?employee.employee_id,
        name = %employee.name,
        "Employee identified"
    );
    employee_info(&employee)
}

/// Returns the caller's own employee record and saved entry.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an employee
/// - The employee does not exist
/// - The store fails
pub fn my_choice(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
) -> Result<MyChoiceResponse, ApiError> {
    let employee_id: i64 = AuthorizationService::authorize_own_entry(actor, "my_choice")?;

    let employee: Employee = persistence
        .get_employee(employee_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| translate_domain_error(DomainError::EmployeeNotFound(employee_id)))?;

    let choice: Option<ChoiceInfo> = persistence
        .get_choice(employee_id)
        .map_err(translate_persistence_error)?
        .map(|entry| choice_info(year, &entry))
        .transpose()?;

    Ok(MyChoiceResponse {
        employee: employee_info(&employee)?,
        choice,
    })
}

/// Validates and commits the caller's week choices.
///
/// Employees can only submit for themselves. The whole check-and-write runs
/// atomically in the store.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an employee
/// - Any allocation rule rejects the submission
/// - The store is busy (`Busy`) or fails
pub fn submit_choice(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
    request: SubmitChoiceRequest,
) -> Result<SubmitChoiceResponse, ApiError> {
    let employee_id: i64 = AuthorizationService::authorize_own_entry(actor, "submit_choice")?;

    let submission: ChoiceSubmission = ChoiceSubmission {
        holiday_week: request.holiday_week.map(WeekNumber::new),
        additional_week: request.additional_week.map(WeekNumber::new),
        reserve_week: request.reserve_week.map(WeekNumber::new),
        fourth_week: request.fourth_week.map(WeekNumber::new),
    };

    let result: CommitResult = persistence
        .submit_choice(year, employee_id, submission)
        .map_err(translate_persistence_error)?;

    info!(
        employee_id,
        created = result.created,
        weeks = ?result.week_labels,
        "Choice committed"
    );

    Ok(SubmitChoiceResponse {
        ok: true,
        created: result.created,
        week_labels: result.week_labels,
        updated_at: format_timestamp(result.updated_at)?,
    })
}

// ============================================================================
// Read models
// ============================================================================

/// Lists every summer week with its availability and occupancy.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn week_overview(
    persistence: &mut Persistence,
    year: u16,
) -> Result<WeekOverviewResponse, ApiError> {
    let state: State = load_state(persistence, year)?;
    let occupancy: Occupancy = state.occupancy();

    Ok(WeekOverviewResponse {
        year,
        weeks: summer_overview(&state, &occupancy)?,
    })
}

/// Builds the employee dashboard.
///
/// Administrators get the same view without a personal entry.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn dashboard(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
) -> Result<DashboardResponse, ApiError> {
    let state: State = load_state(persistence, year)?;
    let occupancy: Occupancy = state.occupancy();
    let entry = |week: WeekNumber| {
        week_overview_entry(
            year,
            week,
            &state.configuration,
            &state.availability,
            &occupancy,
        )
    };

    let holiday: Vec<WeekOverviewEntry> = holiday_weeks()
        .into_iter()
        .map(entry)
        .collect::<Result<_, _>>()?;

    let mut weeks_before: Vec<WeekOverviewEntry> = Vec::new();
    let mut weeks_after: Vec<WeekOverviewEntry> = Vec::new();
    for overview in summer_overview(&state, &occupancy)? {
        let week: WeekNumber = WeekNumber::new(overview.week_number);
        match stored_week_info(year, week)?.category {
            WeekCategory::Before => weeks_before.push(overview),
            WeekCategory::After => weeks_after.push(overview),
        }
    }

    let my_choice: Option<ChoiceInfo> = actor
        .employee_id
        .and_then(|id| state.entry_for(id))
        .map(|e| choice_info(year, e))
        .transpose()?;

    Ok(DashboardResponse {
        year,
        note: state.configuration.note().to_string(),
        capacity_per_week: state.configuration.capacity_per_week(),
        fourth_slot_enabled: state.configuration.fourth_slot_enabled(),
        fourth_slot_offerable: state.fourth_slot_offerable(),
        holiday_weeks: holiday,
        weeks_before,
        weeks_after,
        my_choice,
    })
}

/// Builds the admin board: counts, rosters and every employee's entry.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or the store fails.
pub fn admin_overview(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
) -> Result<AdminOverviewResponse, ApiError> {
    AuthorizationService::authorize_admin(actor, "admin_overview")?;

    let state: State = load_state(persistence, year)?;
    let occupancy: Occupancy = state.occupancy();
    let mut rosters: BTreeMap<WeekNumber, WeekRoster> =
        roster_by_week(&state.entries, &state.employees);

    let weeks: Vec<AdminWeekRow> = summer_overview(&state, &occupancy)?
        .into_iter()
        .map(|week| {
            let roster: WeekRoster = rosters
                .remove(&WeekNumber::new(week.week_number))
                .unwrap_or_default();
            AdminWeekRow {
                week,
                roster: WeekRosterInfo {
                    holiday: roster.holiday,
                    additional: roster.additional,
                    reserve: roster.reserve,
                    fourth: roster.fourth,
                },
            }
        })
        .collect();

    let employees: Vec<AdminEmployeeRow> = state
        .employees
        .iter()
        .map(|employee| {
            let info: EmployeeInfo = employee_info(employee)?;
            let choice: Option<ChoiceInfo> = state
                .entry_for(info.employee_id)
                .map(|e| choice_info(year, e))
                .transpose()?;
            Ok(AdminEmployeeRow {
                employee: info,
                choice,
            })
        })
        .collect::<Result<_, ApiError>>()?;

    Ok(AdminOverviewResponse {
        year,
        capacity_per_week: state.configuration.capacity_per_week(),
        fourth_slot_enabled: state.configuration.fourth_slot_enabled(),
        note: state.configuration.note().to_string(),
        completed_count: state.completed_count(),
        active_employee_count: state.active_employee_count(),
        weeks,
        employees,
    })
}

// ============================================================================
// Admin mutations
// ============================================================================

/// Changes the capacity per week.
///
/// Existing entries are never re-validated; an over-subscribed week simply
/// shows as full.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, the capacity is
/// zero, or the store fails.
pub fn set_capacity(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
    request: SetCapacityRequest,
) -> Result<SettingsResponse, ApiError> {
    AuthorizationService::authorize_admin(actor, "set_capacity")?;

    let result: TransitionResult = execute(
        persistence,
        year,
        Command::SetCapacity {
            capacity: request.capacity_per_week,
        },
    )?;

    info!(capacity = request.capacity_per_week, "Capacity updated");
    Ok(settings_response(
        &result.new_state.configuration,
        format!("Capacity per week set to {}", request.capacity_per_week),
    ))
}

/// Enables or disables the fourth slot.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator or the store fails.
pub fn set_fourth_slot_enabled(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
    request: SetFourthSlotRequest,
) -> Result<SettingsResponse, ApiError> {
    AuthorizationService::authorize_admin(actor, "set_fourth_slot_enabled")?;

    let result: TransitionResult = execute(
        persistence,
        year,
        Command::SetFourthSlotEnabled {
            enabled: request.enabled,
        },
    )?;

    info!(enabled = request.enabled, "Fourth slot updated");
    let state: &str = if request.enabled { "enabled" } else { "disabled" };
    Ok(settings_response(
        &result.new_state.configuration,
        format!("Fourth week slot {state}"),
    ))
}

/// Replaces capacity, fourth-slot flag and note in one write.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, the capacity is
/// zero, or the store fails.
pub fn update_settings(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
    request: UpdateSettingsRequest,
) -> Result<SettingsResponse, ApiError> {
    AuthorizationService::authorize_admin(actor, "update_settings")?;

    let result: TransitionResult = execute(
        persistence,
        year,
        Command::UpdateSettings {
            capacity: request.capacity_per_week,
            fourth_slot_enabled: request.fourth_slot_enabled,
            note: request.note,
        },
    )?;

    info!(
        capacity = request.capacity_per_week,
        fourth_slot_enabled = request.fourth_slot_enabled,
        "Settings replaced"
    );
    Ok(settings_response(
        &result.new_state.configuration,
        String::from("Settings saved"),
    ))
}

/// Sets one week's availability for the configured year.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, the week is not in
/// the calendar (`InvalidWeek`), or the store fails.
pub fn set_week_availability(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
    week_number: u16,
    request: SetWeekAvailabilityRequest,
) -> Result<WeekAvailabilityResponse, ApiError> {
    AuthorizationService::authorize_admin(actor, "set_week_availability")?;

    execute(
        persistence,
        year,
        Command::SetWeekAvailability {
            week: WeekNumber::new(week_number),
            available: request.available,
        },
    )?;

    info!(
        year,
        week = week_number,
        available = request.available,
        "Week availability updated"
    );
    let state: &str = if request.available {
        "available"
    } else {
        "unavailable"
    };
    Ok(WeekAvailabilityResponse {
        year,
        week_number,
        available: request.available,
        message: format!("Week {week_number} marked {state}"),
    })
}

/// Deletes an employee's ledger entry, freeing its weeks.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, the employee has
/// no entry (`ChoiceNotFound`), or the store fails.
pub fn delete_choice(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
    employee_id: i64,
) -> Result<DeleteChoiceResponse, ApiError> {
    AuthorizationService::authorize_admin(actor, "delete_choice")?;

    execute(persistence, year, Command::DeleteChoice { employee_id })?;

    info!(employee_id, "Choice deleted");
    Ok(DeleteChoiceResponse {
        employee_id,
        message: format!("Choice of employee {employee_id} deleted"),
    })
}

/// Activates or deactivates an employee.
///
/// A deactivated employee keeps their entry but can no longer identify or
/// submit.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, the employee does
/// not exist (`EmployeeNotFound`), or the store fails.
pub fn set_employee_active(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
    employee_id: i64,
    request: SetEmployeeActiveRequest,
) -> Result<EmployeeActiveResponse, ApiError> {
    AuthorizationService::authorize_admin(actor, "set_employee_active")?;

    execute(
        persistence,
        year,
        Command::SetEmployeeActive {
            employee_id,
            active: request.active,
        },
    )?;

    info!(employee_id, active = request.active, "Employee active flag updated");
    let state: &str = if request.active {
        "activated"
    } else {
        "deactivated"
    };
    Ok(EmployeeActiveResponse {
        employee_id,
        active: request.active,
        message: format!("Employee {employee_id} {state}"),
    })
}
