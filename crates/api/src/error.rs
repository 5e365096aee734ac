// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use summer_weeks::CoreError;
use summer_weeks_domain::{DomainError, WeekNumber};
use summer_weeks_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Machine-readable error kinds exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Holiday week missing or not adjacent to the fixed holiday week.
    InvalidHolidaySelection,
    /// The same week appears in two slots.
    DuplicateSelection,
    /// The week is outside the summer range or unavailable.
    WeekUnavailable,
    /// A fourth week was sent while the slot is disabled.
    FourthSlotDisabled,
    /// The week has no remaining capacity.
    WeekFull,
    /// The week does not exist in the calendar year.
    InvalidWeek,
    /// The capacity is not positive.
    InvalidCapacity,
    /// The employee name is blank.
    InvalidName,
    /// The employee does not exist.
    EmployeeNotFound,
    /// The employee has been deactivated.
    EmployeeInactive,
    /// The employee has no saved choice.
    ChoiceNotFound,
    /// The write lock could not be obtained; the request may be retried.
    Busy,
    /// The caller could not be identified.
    AuthenticationFailed,
    /// The caller lacks the required role.
    Unauthorized,
    /// A request field is malformed.
    InvalidInput,
    /// Unexpected failure.
    Internal,
}

impl ErrorKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidHolidaySelection => "InvalidHolidaySelection",
            Self::DuplicateSelection => "DuplicateSelection",
            Self::WeekUnavailable => "WeekUnavailable",
            Self::FourthSlotDisabled => "FourthSlotDisabled",
            Self::WeekFull => "WeekFull",
            Self::InvalidWeek => "InvalidWeek",
            Self::InvalidCapacity => "InvalidCapacity",
            Self::InvalidName => "InvalidName",
            Self::EmployeeNotFound => "EmployeeNotFound",
            Self::EmployeeInactive => "EmployeeInactive",
            Self::ChoiceNotFound => "ChoiceNotFound",
            Self::Busy => "Busy",
            Self::AuthenticationFailed => "AuthenticationFailed",
            Self::Unauthorized => "Unauthorized",
            Self::InvalidInput => "InvalidInput",
            Self::Internal => "Internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A submission was rejected by an allocation rule.
    DomainRuleViolation {
        /// The rule that was violated.
        kind: ErrorKind,
        /// The offending week, when the rule names one.
        week: Option<WeekNumber>,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The specific kind of invalid input.
        kind: ErrorKind,
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The specific kind of missing resource.
        kind: ErrorKind,
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The store is busy with another writer.
    Busy {
        /// A human-readable description.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the machine-readable kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthenticationFailed { .. } => ErrorKind::AuthenticationFailed,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::DomainRuleViolation { kind, .. }
            | Self::InvalidInput { kind, .. }
            | Self::ResourceNotFound { kind, .. } => *kind,
            Self::Busy { .. } => ErrorKind::Busy,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Returns the week the error refers to, if any.
    #[must_use]
    pub const fn week(&self) -> Option<WeekNumber> {
        match self {
            Self::DomainRuleViolation { week, .. } => *week,
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { message, .. } | Self::Busy { message } => {
                write!(f, "{message}")
            }
            Self::InvalidInput { field, message, .. } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
                ..
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    let week: Option<WeekNumber> = err.week();
    let rule = |kind: ErrorKind| ApiError::DomainRuleViolation {
        kind,
        week,
        message: message.clone(),
    };

    match err {
        DomainError::InvalidHolidaySelection { .. } => rule(ErrorKind::InvalidHolidaySelection),
        DomainError::DuplicateSelection { .. } => rule(ErrorKind::DuplicateSelection),
        DomainError::WeekUnavailable { .. } => rule(ErrorKind::WeekUnavailable),
        DomainError::FourthSlotDisabled => rule(ErrorKind::FourthSlotDisabled),
        DomainError::WeekFull { .. } => rule(ErrorKind::WeekFull),
        DomainError::EmployeeInactive(_) => rule(ErrorKind::EmployeeInactive),
        DomainError::InvalidWeek { .. } => ApiError::InvalidInput {
            kind: ErrorKind::InvalidWeek,
            field: String::from("week"),
            message,
        },
        DomainError::InvalidCapacity(_) => ApiError::InvalidInput {
            kind: ErrorKind::InvalidCapacity,
            field: String::from("capacity_per_week"),
            message,
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            kind: ErrorKind::InvalidName,
            field: String::from("name"),
            message: msg,
        },
        DomainError::EmployeeNotFound(_) => ApiError::ResourceNotFound {
            kind: ErrorKind::EmployeeNotFound,
            resource_type: String::from("Employee"),
            message,
        },
        DomainError::ChoiceNotFound(_) => ApiError::ResourceNotFound {
            kind: ErrorKind::ChoiceNotFound,
            resource_type: String::from("Choice"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Engine rejections raised inside a transaction keep their domain meaning;
/// lock exhaustion becomes the retryable `Busy` error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::Rejected(core_err) => translate_core_error(core_err),
        PersistenceError::Busy => ApiError::Busy {
            message: String::from("Another change is being saved, please try again"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
