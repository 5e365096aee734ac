// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod admin_route_tests;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;
use summer_weeks_domain::Configuration;
use summer_weeks_persistence::Persistence;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::actor::{ACTOR_ROLE_HEADER, EMPLOYEE_ID_HEADER};
use crate::{AppState, build_router};

pub const TEST_YEAR: u16 = 2026;

/// Helper to create application state over a seeded in-memory store.
pub fn create_test_state(capacity: u32) -> AppState {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    persistence
        .seed(
            TEST_YEAR,
            &Configuration::new(capacity, true, String::new()).unwrap(),
        )
        .unwrap();

    AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        year: TEST_YEAR,
    }
}

/// Helper to create a router over a seeded in-memory store.
pub fn create_test_app(capacity: u32) -> Router {
    build_router(create_test_state(capacity))
}

/// Who a test request is sent as.
#[derive(Debug, Clone, Copy)]
pub enum Caller {
    Anonymous,
    Admin,
    Employee(i64),
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    caller: Caller,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    match caller {
        Caller::Anonymous => {}
        Caller::Admin => builder = builder.header(ACTOR_ROLE_HEADER, "admin"),
        Caller::Employee(id) => {
            builder = builder
                .header(ACTOR_ROLE_HEADER, "employee")
                .header(EMPLOYEE_ID_HEADER, id.to_string());
        }
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Identifies an employee through the HTTP surface and returns their id.
pub async fn identify(app: &Router, surname: &str, given_name: &str) -> i64 {
    let response = send(
        app,
        "POST",
        "/employees/identify",
        Caller::Anonymous,
        Some(serde_json::json!({ "surname": surname, "given_name": given_name })),
    )
    .await;
    body_json(response).await["employee_id"].as_i64().unwrap()
}
