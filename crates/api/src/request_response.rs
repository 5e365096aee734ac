// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// API request to identify (and lazily register) an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyEmployeeRequest {
    /// The employee's surname.
    pub surname: String,
    /// The employee's given name.
    pub given_name: String,
}

/// Employee information returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// The canonical employee identifier.
    pub employee_id: i64,
    /// The stored (title-cased) surname.
    pub surname: String,
    /// The stored (title-cased) given name.
    pub given_name: String,
    /// `"Surname Given"`.
    pub full_name: String,
    /// Whether the employee may submit choices.
    pub active: bool,
}

/// API request to submit the caller's week choices.
///
/// Week numbers are plain integers here; rule checks happen in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitChoiceRequest {
    /// The mandatory holiday-adjacent week.
    pub holiday_week: Option<u16>,
    /// Optional additional week.
    #[serde(default)]
    pub additional_week: Option<u16>,
    /// Optional reserve week.
    #[serde(default)]
    pub reserve_week: Option<u16>,
    /// Optional fourth week.
    #[serde(default)]
    pub fourth_week: Option<u16>,
}

/// API response for a committed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitChoiceResponse {
    /// Always `true`; failures are reported through the error body.
    pub ok: bool,
    /// `true` when this was the employee's first entry.
    pub created: bool,
    /// Labels of the committed weeks, in slot order.
    pub week_labels: Vec<String>,
    /// When the entry was written (RFC 3339).
    pub updated_at: String,
}

/// A saved ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceInfo {
    /// The owning employee.
    pub employee_id: i64,
    /// The holiday-adjacent week.
    pub holiday_week: u16,
    /// The additional week, if any.
    pub additional_week: Option<u16>,
    /// The reserve week, if any.
    pub reserve_week: Option<u16>,
    /// The fourth week, if any.
    pub fourth_week: Option<u16>,
    /// Labels of the present weeks, in slot order.
    pub week_labels: Vec<String>,
    /// When the entry was first committed (RFC 3339).
    pub created_at: String,
    /// When the entry was last overwritten (RFC 3339).
    pub updated_at: String,
}

/// API response for the caller's own entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyChoiceResponse {
    /// The caller.
    pub employee: EmployeeInfo,
    /// The saved entry, absent until the first submission.
    pub choice: Option<ChoiceInfo>,
}

/// Ledger references to one week, by slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OccupancyByType {
    /// Holiday slot references.
    pub holiday: u32,
    /// Additional slot references.
    pub additional: u32,
    /// Reserve slot references.
    pub reserve: u32,
    /// Fourth slot references.
    pub fourth: u32,
    /// All references.
    pub total: u32,
}

/// One row of the week overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekOverviewEntry {
    /// The ISO week number.
    pub week_number: u16,
    /// Monday of the week (ISO 8601 date).
    pub start: String,
    /// Sunday of the week (ISO 8601 date).
    pub end: String,
    /// `Week N (dd/mm - dd/mm)`.
    pub label: String,
    /// `before` or `after` the fixed holiday week.
    pub category: String,
    /// The availability flag in effect.
    pub available: bool,
    /// Capacity per week in effect.
    pub capacity: u32,
    /// Current references by slot.
    pub occupancy_by_type: OccupancyByType,
    /// `true` once the total reaches capacity.
    pub full: bool,
    /// Fill percentage, capped at 100.
    pub fill_percent: u8,
}

/// API response for the week overview of the configured year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekOverviewResponse {
    /// The configured year.
    pub year: u16,
    /// Every summer week in ascending order.
    pub weeks: Vec<WeekOverviewEntry>,
}

/// API response for the employee dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// The configured year.
    pub year: u16,
    /// Free-text note set by the administrator.
    pub note: String,
    /// Capacity per week in effect.
    pub capacity_per_week: u32,
    /// Whether the fourth slot is enabled.
    pub fourth_slot_enabled: bool,
    /// Whether the fourth slot should be shown.
    pub fourth_slot_offerable: bool,
    /// The two legal holiday weeks.
    pub holiday_weeks: Vec<WeekOverviewEntry>,
    /// Summer weeks before the fixed holiday week.
    pub weeks_before: Vec<WeekOverviewEntry>,
    /// Summer weeks after the fixed holiday week.
    pub weeks_after: Vec<WeekOverviewEntry>,
    /// The caller's saved entry, if any.
    pub my_choice: Option<ChoiceInfo>,
}

/// Employee names holding one week, by slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekRosterInfo {
    /// Holiday slot holders.
    pub holiday: Vec<String>,
    /// Additional slot holders.
    pub additional: Vec<String>,
    /// Reserve slot holders.
    pub reserve: Vec<String>,
    /// Fourth slot holders.
    pub fourth: Vec<String>,
}

/// One week row of the admin board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminWeekRow {
    /// Counts and availability.
    pub week: WeekOverviewEntry,
    /// Who holds the week.
    pub roster: WeekRosterInfo,
}

/// One employee row of the admin board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminEmployeeRow {
    /// The employee.
    pub employee: EmployeeInfo,
    /// The saved entry, if any.
    pub choice: Option<ChoiceInfo>,
}

/// API response for the admin board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOverviewResponse {
    /// The configured year.
    pub year: u16,
    /// Capacity per week in effect.
    pub capacity_per_week: u32,
    /// Whether the fourth slot is enabled.
    pub fourth_slot_enabled: bool,
    /// Free-text note.
    pub note: String,
    /// Entries holding a holiday week.
    pub completed_count: usize,
    /// Employees not deactivated.
    pub active_employee_count: usize,
    /// Every summer week.
    pub weeks: Vec<AdminWeekRow>,
    /// Every employee, ordered by surname then given name.
    pub employees: Vec<AdminEmployeeRow>,
}

/// API request to change the capacity per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCapacityRequest {
    /// The new capacity.
    pub capacity_per_week: u32,
}

/// API request to enable or disable the fourth slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFourthSlotRequest {
    /// The new flag.
    pub enabled: bool,
}

/// API request to replace every setting at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    /// The new capacity.
    pub capacity_per_week: u32,
    /// The new fourth-slot flag.
    pub fourth_slot_enabled: bool,
    /// The new note.
    #[serde(default)]
    pub note: String,
}

/// API response after any settings change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsResponse {
    /// Capacity now in effect.
    pub capacity_per_week: u32,
    /// Fourth-slot flag now in effect.
    pub fourth_slot_enabled: bool,
    /// Note now in effect.
    pub note: String,
    /// A success message.
    pub message: String,
}

/// API request to set one week's availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetWeekAvailabilityRequest {
    /// The new flag.
    pub available: bool,
}

/// API response for a week availability change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAvailabilityResponse {
    /// The configured year.
    pub year: u16,
    /// The week.
    pub week_number: u16,
    /// The new flag.
    pub available: bool,
    /// A success message.
    pub message: String,
}

/// API response for a deleted entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteChoiceResponse {
    /// The former owner.
    pub employee_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to activate or deactivate an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEmployeeActiveRequest {
    /// The new flag.
    pub active: bool,
}

/// API response for an employee active flag change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeActiveResponse {
    /// The employee.
    pub employee_id: i64,
    /// The new flag.
    pub active: bool,
    /// A success message.
    pub message: String,
}
