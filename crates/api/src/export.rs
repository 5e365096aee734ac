// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV exports of the choice ledger and of weekly occupancy.
//!
//! Both exports are rendered from one state snapshot, so they never mix
//! values from before and after a concurrent commit.

use csv::Writer;
use summer_weeks::State;
use summer_weeks_domain::{
    ChoiceEntry, DomainError, Employee, Occupancy, Slot, WeekInfo, WeekOccupancy, summer_weeks,
    week_info,
};
use summer_weeks_persistence::Persistence;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_persistence_error};

const CHOICES_HEADER: [&str; 11] = [
    "Surname",
    "Given name",
    "Holiday week",
    "Holiday period",
    "Additional week",
    "Additional period",
    "Reserve week",
    "Reserve period",
    "Fourth week",
    "Fourth period",
    "Saved at",
];

const WEEKS_HEADER: [&str; 8] = [
    "Week",
    "Period",
    "Category",
    "Holiday",
    "Additional",
    "Reserve",
    "Fourth",
    "Total",
];

/// Errors raised while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    /// The buffered output could not be recovered from the writer.
    #[error("CSV flush failed: {0}")]
    Flush(String),
    /// The output was not valid UTF-8.
    #[error("CSV output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    /// A stored week is outside the calendar.
    #[error("Calendar lookup failed: {0}")]
    Calendar(#[from] DomainError),
    /// A timestamp could not be formatted.
    #[error("Timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn slot_columns(
    year: u16,
    entry: Option<&ChoiceEntry>,
    slot: Slot,
) -> Result<[String; 2], ExportError> {
    match entry.and_then(|e| e.choice.week_for(slot)) {
        Some(week) => Ok([week.to_string(), week_info(year, week)?.period()]),
        None => Ok([String::new(), String::new()]),
    }
}

/// Renders one row per active employee with their saved weeks.
///
/// Rows are ordered by surname, then given name, ignoring case. Employees
/// without an entry get empty week columns.
///
/// # Errors
///
/// Returns an error if a stored week is outside the calendar or the writer
/// fails.
pub fn export_choices_csv(state: &State) -> Result<String, ExportError> {
    let mut employees: Vec<&Employee> = state.employees.iter().filter(|e| e.active).collect();
    employees.sort_by_key(|e| (e.name.surname_key(), e.name.given_name_key()));

    let mut writer: Writer<Vec<u8>> = Writer::from_writer(Vec::new());
    writer.write_record(CHOICES_HEADER)?;

    for employee in employees {
        let entry: Option<&ChoiceEntry> = employee.employee_id.and_then(|id| state.entry_for(id));

        let mut record: Vec<String> = vec![
            employee.name.surname().to_string(),
            employee.name.given_name().to_string(),
        ];
        for slot in Slot::ALL {
            record.extend(slot_columns(state.year, entry, slot)?);
        }
        record.push(match entry {
            Some(e) => e.updated_at.format(&Rfc3339)?,
            None => String::new(),
        });

        writer.write_record(&record)?;
    }

    finish(writer)
}

/// Renders one row per summer week with its occupancy by slot.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn export_week_summary_csv(state: &State) -> Result<String, ExportError> {
    let occupancy: Occupancy = state.occupancy();

    let mut writer: Writer<Vec<u8>> = Writer::from_writer(Vec::new());
    writer.write_record(WEEKS_HEADER)?;

    for week in summer_weeks() {
        let info: WeekInfo = week_info(state.year, week)?;
        let counts: WeekOccupancy = occupancy.week(week);
        writer.write_record([
            week.to_string(),
            info.period(),
            info.category.to_string(),
            counts.holiday.to_string(),
            counts.additional.to_string(),
            counts.reserve.to_string(),
            counts.fourth.to_string(),
            counts.total.to_string(),
        ])?;
    }

    finish(writer)
}

/// Exports every active employee's choices as CSV.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, the store fails,
/// or rendering fails.
pub fn export_choices(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
) -> Result<String, ApiError> {
    AuthorizationService::authorize_admin(actor, "export_choices")?;

    let state: State = persistence
        .load_state(year)
        .map_err(translate_persistence_error)?;
    let csv: String = export_choices_csv(&state)?;

    info!(year, entries = state.entries.len(), "Choices exported");
    Ok(csv)
}

/// Exports the weekly occupancy summary as CSV.
///
/// # Errors
///
/// Returns an error if the actor is not an administrator, the store fails,
/// or rendering fails.
pub fn export_week_summary(
    persistence: &mut Persistence,
    year: u16,
    actor: &AuthenticatedActor,
) -> Result<String, ApiError> {
    AuthorizationService::authorize_admin(actor, "export_week_summary")?;

    let state: State = persistence
        .load_state(year)
        .map_err(translate_persistence_error)?;
    let csv: String = export_week_summary_csv(&state)?;

    info!(year, "Week summary exported");
    Ok(csv)
}
