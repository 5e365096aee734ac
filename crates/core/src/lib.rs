// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use summer_weeks_domain::{DomainError, Employee, validate_employee_active};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{CommitResult, State, StateChange, TransitionResult};

/// Validates that an employee exists in the state.
///
/// This is a read-only validation used before any command touches the ledger.
///
/// # Arguments
///
/// * `state` - The state to search
/// * `employee_id` - The employee to look up
///
/// # Errors
///
/// Returns `DomainError::EmployeeNotFound` if no such employee exists.
pub fn validate_employee_exists(
    state: &State,
    employee_id: i64,
) -> Result<&Employee, DomainError> {
    state
        .employee(employee_id)
        .ok_or(DomainError::EmployeeNotFound(employee_id))
}

/// Validates that an employee exists and may submit choices.
///
/// # Errors
///
/// Returns an error if:
/// - The employee does not exist
/// - The employee has been deactivated
pub fn validate_employee_can_submit(
    state: &State,
    employee_id: i64,
) -> Result<&Employee, DomainError> {
    let employee: &Employee = validate_employee_exists(state, employee_id)?;
    validate_employee_active(employee)?;
    Ok(employee)
}
