// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Summer Weeks system.
//!
//! Handlers take an authenticated actor and a plain request DTO, enforce
//! authorization, hand the work to the persistence layer (which runs the
//! allocation engine atomically) and translate every lower-layer error into
//! an `ApiError`. Nothing here knows about HTTP.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod error;
mod export;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role};
pub use error::{
    ApiError, AuthError, ErrorKind, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use export::{
    ExportError, export_choices, export_choices_csv, export_week_summary,
    export_week_summary_csv,
};
pub use handlers::{
    admin_overview, dashboard, delete_choice, identify_employee, my_choice, set_capacity,
    set_employee_active, set_fourth_slot_enabled, set_week_availability, submit_choice,
    update_settings, week_overview,
};
pub use request_response::{
    AdminEmployeeRow, AdminOverviewResponse, AdminWeekRow, ChoiceInfo, DashboardResponse,
    DeleteChoiceResponse, EmployeeActiveResponse, EmployeeInfo, IdentifyEmployeeRequest,
    MyChoiceResponse, OccupancyByType, SetCapacityRequest, SetEmployeeActiveRequest,
    SetFourthSlotRequest, SetWeekAvailabilityRequest, SettingsResponse, SubmitChoiceRequest,
    SubmitChoiceResponse, UpdateSettingsRequest, WeekAvailabilityResponse, WeekOverviewEntry,
    WeekOverviewResponse, WeekRosterInfo,
};
