// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::http::{StatusCode, header};
use serde_json::json;

use super::{Caller, body_bytes, body_json, create_test_app, identify, send};

#[tokio::test]
async fn test_employee_cannot_reach_admin_routes() {
    let app = create_test_app(5);
    let employee_id = identify(&app, "Rossi", "Mario").await;

    let response = send(
        &app,
        "POST",
        "/admin/capacity",
        Caller::Employee(employee_id),
        Some(json!({ "capacity_per_week": 9 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["kind"], json!("Unauthorized"));

    let response = send(
        &app,
        "GET",
        "/admin/overview",
        Caller::Employee(employee_id),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_role_is_401() {
    let app = create_test_app(5);
    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/admin/overview")
        .header("x-actor-role", "manager")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_zero_capacity_is_400() {
    let app = create_test_app(5);

    let response = send(
        &app,
        "POST",
        "/admin/capacity",
        Caller::Admin,
        Some(json!({ "capacity_per_week": 0 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], json!("InvalidCapacity"));
}

#[tokio::test]
async fn test_settings_and_fourth_slot_updates() {
    let app = create_test_app(5);

    let response = send(
        &app,
        "POST",
        "/admin/settings",
        Caller::Admin,
        Some(json!({
            "capacity_per_week": 3,
            "fourth_slot_enabled": true,
            "note": "Deadline 31 March"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["capacity_per_week"], json!(3));

    let response = send(
        &app,
        "POST",
        "/admin/fourth_slot",
        Caller::Admin,
        Some(json!({ "enabled": false })),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["fourth_slot_enabled"], json!(false));
    assert_eq!(body["capacity_per_week"], json!(3));
    assert_eq!(body["note"], json!("Deadline 31 March"));

    let employee_id = identify(&app, "Rossi", "Mario").await;
    let response = send(
        &app,
        "POST",
        "/choices",
        Caller::Employee(employee_id),
        Some(json!({ "holiday_week": 32, "fourth_week": 36 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["kind"], json!("FourthSlotDisabled"));
}

#[tokio::test]
async fn test_week_availability_route() {
    let app = create_test_app(5);

    let response = send(
        &app,
        "POST",
        "/admin/weeks/27/availability",
        Caller::Admin,
        Some(json!({ "available": false })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["available"], json!(false));

    let employee_id = identify(&app, "Rossi", "Mario").await;
    let response = send(
        &app,
        "POST",
        "/choices",
        Caller::Employee(employee_id),
        Some(json!({ "holiday_week": 32, "additional_week": 27 })),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["kind"], json!("WeekUnavailable"));
    assert_eq!(body["week"], json!(27));

    let response = send(
        &app,
        "POST",
        "/admin/weeks/54/availability",
        Caller::Admin,
        Some(json!({ "available": true })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], json!("InvalidWeek"));
}

#[tokio::test]
async fn test_delete_choice_route() {
    let app = create_test_app(5);
    let employee_id = identify(&app, "Rossi", "Mario").await;
    send(
        &app,
        "POST",
        "/choices",
        Caller::Employee(employee_id),
        Some(json!({ "holiday_week": 32 })),
    )
    .await;

    let uri = format!("/admin/choices/{employee_id}");
    let response = send(&app, "DELETE", &uri, Caller::Admin, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "DELETE", &uri, Caller::Admin, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["kind"], json!("ChoiceNotFound"));
}

#[tokio::test]
async fn test_deactivated_employee_is_blocked() {
    let app = create_test_app(5);
    let employee_id = identify(&app, "Rossi", "Mario").await;

    let response = send(
        &app,
        "POST",
        &format!("/admin/employees/{employee_id}/active"),
        Caller::Admin,
        Some(json!({ "active": false })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        "POST",
        "/choices",
        Caller::Employee(employee_id),
        Some(json!({ "holiday_week": 32 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["kind"], json!("EmployeeInactive"));
}

#[tokio::test]
async fn test_admin_overview_and_exports() {
    let app = create_test_app(5);
    let employee_id = identify(&app, "Rossi", "Mario").await;
    send(
        &app,
        "POST",
        "/choices",
        Caller::Employee(employee_id),
        Some(json!({ "holiday_week": 32, "additional_week": 24 })),
    )
    .await;

    let board = body_json(send(&app, "GET", "/admin/overview", Caller::Admin, None).await).await;
    assert_eq!(board["completed_count"], json!(1));
    assert_eq!(board["active_employee_count"], json!(1));

    let response = send(&app, "GET", "/admin/export/choices.csv", Caller::Admin, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let csv = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(csv.contains("Rossi,Mario,32,03/08-09/08/2026,24,08/06-14/06/2026"));

    let response = send(&app, "GET", "/admin/export/weeks.csv", Caller::Admin, None).await;
    let csv = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(csv.lines().count(), 16);
}

#[tokio::test]
async fn test_availability_beyond_calendar_gets_json_error_body() {
    let app = create_test_app(5);

    let response = send(
        &app,
        "POST",
        "/admin/weeks/300/availability",
        Caller::Admin,
        Some(json!({ "available": true })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["kind"], json!("InvalidWeek"));

    let response = send(
        &app,
        "POST",
        "/admin/weeks/abc/availability",
        Caller::Admin,
        Some(json!({ "available": true })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], json!("InvalidInput"));

    let response = send(&app, "DELETE", "/admin/choices/abc", Caller::Admin, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], json!("InvalidInput"));
}
