// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use summer_weeks_domain::{ChoiceSubmission, WeekNumber};

/// A command represents user or administrator intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate and commit an employee's week choices.
    SubmitChoice {
        /// The submitting employee.
        employee_id: i64,
        /// The proposed weeks.
        submission: ChoiceSubmission,
    },
    /// Replace the capacity per week, keeping the other settings.
    SetCapacity {
        /// The new capacity.
        capacity: u32,
    },
    /// Enable or disable the fourth slot, keeping the other settings.
    SetFourthSlotEnabled {
        /// Whether submissions may carry a fourth week.
        enabled: bool,
    },
    /// Replace every setting at once.
    UpdateSettings {
        /// The new capacity.
        capacity: u32,
        /// Whether submissions may carry a fourth week.
        fourth_slot_enabled: bool,
        /// Free-text note shown to employees.
        note: String,
    },
    /// Mark a single week available or unavailable.
    SetWeekAvailability {
        /// The week to change.
        week: WeekNumber,
        /// The new flag.
        available: bool,
    },
    /// Delete an employee's ledger entry.
    DeleteChoice {
        /// The owning employee.
        employee_id: i64,
    },
    /// Activate or deactivate an employee.
    SetEmployeeActive {
        /// The employee to change.
        employee_id: i64,
        /// The new flag.
        active: bool,
    },
}

impl Command {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SubmitChoice { .. } => "SubmitChoice",
            Self::SetCapacity { .. } => "SetCapacity",
            Self::SetFourthSlotEnabled { .. } => "SetFourthSlotEnabled",
            Self::UpdateSettings { .. } => "UpdateSettings",
            Self::SetWeekAvailability { .. } => "SetWeekAvailability",
            Self::DeleteChoice { .. } => "DeleteChoice",
            Self::SetEmployeeActive { .. } => "SetEmployeeActive",
        }
    }
}
