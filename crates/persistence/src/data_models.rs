// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversion to domain values.
//!
//! Booleans are stored as `0`/`1` integers and timestamps as RFC 3339 text.

use diesel::prelude::*;
use summer_weeks_domain::{
    ChoiceEntry, Configuration, Employee, EmployeeName, WeekChoice, WeekNumber,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{choices, employees, settings};
use crate::error::PersistenceError;

/// Diesel Queryable struct for employee rows.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = employees)]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub surname: String,
    pub given_name: String,
    pub is_active: i32,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = PersistenceError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let name: EmployeeName = EmployeeName::new(&row.surname, &row.given_name).map_err(|e| {
            PersistenceError::SerializationError(format!(
                "Stored employee {} has an invalid name: {e}",
                row.employee_id
            ))
        })?;
        Ok(Self::with_id(row.employee_id, name, row.is_active != 0))
    }
}

/// Diesel Queryable struct for the settings row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = settings)]
pub struct SettingsRow {
    pub capacity_per_week: i32,
    pub fourth_slot_enabled: i32,
    pub note: String,
}

impl TryFrom<SettingsRow> for Configuration {
    type Error = PersistenceError;

    fn try_from(row: SettingsRow) -> Result<Self, Self::Error> {
        let capacity: u32 = u32::try_from(row.capacity_per_week).map_err(|_| {
            PersistenceError::SerializationError(format!(
                "Stored capacity {} is negative",
                row.capacity_per_week
            ))
        })?;
        Self::new(capacity, row.fourth_slot_enabled != 0, row.note)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))
    }
}

/// Diesel Queryable struct for ledger rows.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = choices)]
pub struct ChoiceRow {
    pub employee_id: i64,
    pub holiday_week: i32,
    pub additional_week: Option<i32>,
    pub reserve_week: Option<i32>,
    pub fourth_week: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<ChoiceRow> for ChoiceEntry {
    type Error = PersistenceError;

    fn try_from(row: ChoiceRow) -> Result<Self, Self::Error> {
        let choice: WeekChoice = WeekChoice {
            holiday_week: decode_week(row.holiday_week)?,
            additional_week: row.additional_week.map(decode_week).transpose()?,
            reserve_week: row.reserve_week.map(decode_week).transpose()?,
            fourth_week: row.fourth_week.map(decode_week).transpose()?,
        };
        Ok(Self {
            employee_id: row.employee_id,
            choice,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

/// Decodes a stored week number.
///
/// # Errors
///
/// Returns an error if the value does not fit a week number.
pub fn decode_week(value: i32) -> Result<WeekNumber, PersistenceError> {
    u16::try_from(value)
        .map(WeekNumber::new)
        .map_err(|_| PersistenceError::SerializationError(format!("Invalid week number {value}")))
}

/// Encodes a week number for storage.
#[must_use]
pub fn encode_week(week: WeekNumber) -> i32 {
    i32::from(week.value())
}

/// Formats a timestamp for storage.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be represented in RFC 3339.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(value.format(&Rfc3339)?)
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns an error if the text is not RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    Ok(OffsetDateTime::parse(value, &Rfc3339)?)
}

/// Encodes a boolean flag for storage.
#[must_use]
pub fn encode_flag(value: bool) -> i32 {
    i32::from(value)
}
