// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor roles and authorization checks.
//!
//! Identity is established upstream. The API layer only receives an
//! already-authenticated actor and decides what that actor may do.

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Administrator: may change settings, availability, employees and
    /// other employees' entries, and may read the admin board and exports.
    Admin,
    /// Employee: may read the calendar and manage their own entry only.
    Employee,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }

    /// Parses a role name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` for an unknown role.
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            other => Err(AuthError::AuthenticationFailed {
                reason: format!("Unknown role '{other}'"),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The employee this actor speaks for. Always set for employees.
    pub employee_id: Option<i64>,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates an administrator actor.
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            employee_id: None,
            role: Role::Admin,
        }
    }

    /// Creates an employee actor bound to one employee.
    #[must_use]
    pub const fn employee(employee_id: i64) -> Self {
        Self {
            employee_id: Some(employee_id),
            role: Role::Employee,
        }
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the actor is an administrator.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The action being attempted, for the error message
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Employee => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Resolves the employee an employee actor acts as.
    ///
    /// Employees can only ever act on their own entry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor is an administrator (`Unauthorized`)
    /// - The actor carries no employee id (`AuthenticationFailed`)
    pub fn authorize_own_entry(actor: &AuthenticatedActor, action: &str) -> Result<i64, AuthError> {
        match (actor.role, actor.employee_id) {
            (Role::Employee, Some(employee_id)) => Ok(employee_id),
            (Role::Employee, None) => Err(AuthError::AuthenticationFailed {
                reason: String::from("Employee actor carries no employee id"),
            }),
            (Role::Admin, _) => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Employee"),
            }),
        }
    }
}
