// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request actor extraction.
//!
//! Authentication happens in front of this server. The upstream layer
//! forwards the caller's role in `X-Actor-Role` and, for employees, their
//! identifier in `X-Employee-Id`. Both headers are trusted as-is.

use axum::{extract::FromRequestParts, http::request::Parts};
use summer_weeks_api::{ApiError, AuthenticatedActor, Role};
use tracing::{debug, warn};

use crate::HttpError;

/// Header carrying the caller's role (`admin` or `employee`).
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Header carrying the caller's employee id.
pub const EMPLOYEE_ID_HEADER: &str = "x-employee-id";

/// Extractor for the caller of a request.
///
/// # Errors
///
/// Rejects the request with HTTP 401 if:
/// - The role header is missing or names an unknown role
/// - An employee request carries no valid employee id
pub struct RequestActor(pub AuthenticatedActor);

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<Option<&'a str>, HttpError> {
    parts
        .headers
        .get(name)
        .map(|value| {
            value.to_str().map_err(|_| {
                warn!(header = name, "Header is not valid ASCII");
                authentication_failed(format!("Header '{name}' is not valid ASCII"))
            })
        })
        .transpose()
}

fn authentication_failed(reason: String) -> HttpError {
    HttpError::from(ApiError::AuthenticationFailed { reason })
}

impl<S: Send + Sync> FromRequestParts<S> for RequestActor {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role_header: &str = header_value(parts, ACTOR_ROLE_HEADER)?.ok_or_else(|| {
            debug!("Missing actor role header");
            authentication_failed(String::from("Missing X-Actor-Role header"))
        })?;

        let role: Role = Role::parse(role_header).map_err(|e| HttpError::from(ApiError::from(e)))?;

        let actor: AuthenticatedActor = match role {
            Role::Admin => AuthenticatedActor::admin(),
            Role::Employee => {
                let raw: &str = header_value(parts, EMPLOYEE_ID_HEADER)?.ok_or_else(|| {
                    debug!("Employee request without employee id");
                    authentication_failed(String::from("Missing X-Employee-Id header"))
                })?;
                let employee_id: i64 = raw.trim().parse().map_err(|_| {
                    warn!(value = raw, "Invalid employee id header");
                    authentication_failed(format!("Invalid employee id '{raw}'"))
                })?;
                AuthenticatedActor::employee(employee_id)
            }
        };

        debug!(role = %actor.role, employee_id = ?actor.employee_id, "Request actor resolved");
        Ok(Self(actor))
    }
}
