// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Body and path extractors that reject with the JSON error body.
//!
//! axum's own `Json` and `Path` rejections answer in plain text. These
//! wrappers run the same extraction and turn any rejection into an
//! `InvalidInput` error, so every failure a client sees has the
//! `{error, kind, week?, message}` shape.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use summer_weeks_api::{ApiError, ErrorKind};
use tracing::debug;

use crate::HttpError;

/// JSON request body.
pub struct ApiJson<T>(pub T);

/// Path parameters.
pub struct ApiPath<T>(pub T);

fn invalid_input(field: &str, message: String) -> HttpError {
    debug!(field, message = %message, "Request extraction rejected");
    HttpError::from(ApiError::InvalidInput {
        kind: ErrorKind::InvalidInput,
        field: field.to_string(),
        message,
    })
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let rejection: JsonRejection = rejection;
                Err(invalid_input("body", rejection.body_text()))
            }
        }
    }
}

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                let rejection: PathRejection = rejection;
                Err(invalid_input("path", rejection.body_text()))
            }
        }
    }
}
