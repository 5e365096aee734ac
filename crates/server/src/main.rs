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
#![allow(clippy::multiple_crate_versions)]

mod actor;
mod extract;

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use summer_weeks_api::{
    AdminOverviewResponse, ApiError, DashboardResponse, DeleteChoiceResponse,
    EmployeeActiveResponse, EmployeeInfo, IdentifyEmployeeRequest, MyChoiceResponse,
    SetCapacityRequest, SetEmployeeActiveRequest, SetFourthSlotRequest,
    SetWeekAvailabilityRequest, SettingsResponse, SubmitChoiceRequest, SubmitChoiceResponse,
    UpdateSettingsRequest, WeekAvailabilityResponse, WeekOverviewResponse,
};
use summer_weeks_domain::Configuration;
use summer_weeks_persistence::{Persistence, RetryPolicy, SeedSummary};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{error, info, warn};

use crate::actor::RequestActor;
use crate::extract::{ApiJson, ApiPath};

/// Summer Weeks Server - HTTP server for the summer vacation week allocation system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Calendar year the weeks are allocated for
    #[arg(short, long, default_value_t = 2026)]
    year: u16,

    /// Initial capacity per week (only used when settings are first created)
    #[arg(long, default_value_t = 5)]
    capacity: u32,

    /// Start with the fourth week slot disabled (only used when settings are first created)
    #[arg(long)]
    no_fourth_slot: bool,

    /// Attempts to obtain the database write lock before reporting busy
    #[arg(long, default_value_t = 5)]
    busy_retries: u32,

    /// `SQLite` busy timeout in milliseconds
    #[arg(long, default_value_t = 250)]
    busy_timeout_ms: u64,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<Persistence>>,
    /// The configured calendar year.
    year: u16,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Machine-readable error kind.
    kind: String,
    /// The week the error refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    week: Option<u16>,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error body.
    body: ErrorResponse,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Busy { .. } => {
                warn!(error = %err, "Store busy");
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            body: ErrorResponse {
                error: true,
                kind: err.kind().as_str().to_string(),
                week: err.week().map(|w| w.value()),
                message: err.to_string(),
            },
        }
    }
}

/// Runs `op` on the blocking thread pool with exclusive use of the store.
///
/// Store calls are synchronous and may sleep while waiting for the
/// `SQLite` write lock, so they never run on a runtime worker.
async fn with_persistence<T, F>(app_state: &AppState, op: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce(&mut Persistence) -> Result<T, ApiError> + Send + 'static,
{
    let mut persistence: OwnedMutexGuard<Persistence> =
        Arc::clone(&app_state.persistence).lock_owned().await;

    let result: Result<T, ApiError> = tokio::task::spawn_blocking(move || op(&mut persistence))
        .await
        .map_err(|e| {
            HttpError::from(ApiError::Internal {
                message: format!("Store task failed: {e}"),
            })
        })?;
    result.map_err(HttpError::from)
}

/// Handler for POST `/employees/identify` endpoint.
///
/// Looks an employee up by name and registers them on first use.
async fn handle_identify_employee(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<IdentifyEmployeeRequest>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    info!("Handling identify_employee request");

    let response: EmployeeInfo = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::identify_employee(persistence, &req)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for GET `/choices/me` endpoint.
async fn handle_my_choice(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
) -> Result<Json<MyChoiceResponse>, HttpError> {
    let year: u16 = app_state.year;
    let response: MyChoiceResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::my_choice(persistence, year, &actor)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for POST `/choices` endpoint.
///
/// Validates and commits the caller's week choices.
async fn handle_submit_choice(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    ApiJson(req): ApiJson<SubmitChoiceRequest>,
) -> Result<Json<SubmitChoiceResponse>, HttpError> {
    info!(employee_id = ?actor.employee_id, "Handling submit_choice request");

    let year: u16 = app_state.year;
    let response: SubmitChoiceResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::submit_choice(persistence, year, &actor, req)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for GET `/weeks/overview` endpoint.
async fn handle_week_overview(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<WeekOverviewResponse>, HttpError> {
    let year: u16 = app_state.year;
    let response: WeekOverviewResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::week_overview(persistence, year)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for GET `/dashboard` endpoint.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
) -> Result<Json<DashboardResponse>, HttpError> {
    let year: u16 = app_state.year;
    let response: DashboardResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::dashboard(persistence, year, &actor)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for GET `/admin/overview` endpoint.
async fn handle_admin_overview(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
) -> Result<Json<AdminOverviewResponse>, HttpError> {
    let year: u16 = app_state.year;
    let response: AdminOverviewResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::admin_overview(persistence, year, &actor)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for POST `/admin/capacity` endpoint.
async fn handle_set_capacity(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    ApiJson(req): ApiJson<SetCapacityRequest>,
) -> Result<Json<SettingsResponse>, HttpError> {
    info!(capacity = req.capacity_per_week, "Handling set_capacity request");

    let year: u16 = app_state.year;
    let response: SettingsResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::set_capacity(persistence, year, &actor, req)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for POST `/admin/fourth_slot` endpoint.
async fn handle_set_fourth_slot(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    ApiJson(req): ApiJson<SetFourthSlotRequest>,
) -> Result<Json<SettingsResponse>, HttpError> {
    info!(enabled = req.enabled, "Handling set_fourth_slot request");

    let year: u16 = app_state.year;
    let response: SettingsResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::set_fourth_slot_enabled(persistence, year, &actor, req)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for POST `/admin/settings` endpoint.
async fn handle_update_settings(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    ApiJson(req): ApiJson<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, HttpError> {
    info!("Handling update_settings request");

    let year: u16 = app_state.year;
    let response: SettingsResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::update_settings(persistence, year, &actor, req)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for POST `/admin/weeks/{week}/availability` endpoint.
async fn handle_set_week_availability(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    ApiPath(week): ApiPath<u16>,
    ApiJson(req): ApiJson<SetWeekAvailabilityRequest>,
) -> Result<Json<WeekAvailabilityResponse>, HttpError> {
    info!(week, available = req.available, "Handling set_week_availability request");

    let year: u16 = app_state.year;
    let response: WeekAvailabilityResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::set_week_availability(persistence, year, &actor, week, req)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for DELETE `/admin/choices/{employee_id}` endpoint.
async fn handle_delete_choice(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    ApiPath(employee_id): ApiPath<i64>,
) -> Result<Json<DeleteChoiceResponse>, HttpError> {
    info!(employee_id, "Handling delete_choice request");

    let year: u16 = app_state.year;
    let response: DeleteChoiceResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::delete_choice(persistence, year, &actor, employee_id)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for POST `/admin/employees/{employee_id}/active` endpoint.
async fn handle_set_employee_active(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    ApiPath(employee_id): ApiPath<i64>,
    ApiJson(req): ApiJson<SetEmployeeActiveRequest>,
) -> Result<Json<EmployeeActiveResponse>, HttpError> {
    info!(employee_id, active = req.active, "Handling set_employee_active request");

    let year: u16 = app_state.year;
    let response: EmployeeActiveResponse = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::set_employee_active(persistence, year, &actor, employee_id, req)
    })
    .await?;
    Ok(Json(response))
}

fn csv_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body).into_response()
}

/// Handler for GET `/admin/export/choices.csv` endpoint.
async fn handle_export_choices(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
) -> Result<Response, HttpError> {
    let year: u16 = app_state.year;
    let csv: String = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::export_choices(persistence, year, &actor)
    })
    .await?;
    Ok(csv_response(csv))
}

/// Handler for GET `/admin/export/weeks.csv` endpoint.
async fn handle_export_weeks(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
) -> Result<Response, HttpError> {
    let year: u16 = app_state.year;
    let csv: String = with_persistence(&app_state, move |persistence| {
        summer_weeks_api::export_week_summary(persistence, year, &actor)
    })
    .await?;
    Ok(csv_response(csv))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/employees/identify", post(handle_identify_employee))
        .route("/choices/me", get(handle_my_choice))
        .route("/choices", post(handle_submit_choice))
        .route("/weeks/overview", get(handle_week_overview))
        .route("/dashboard", get(handle_dashboard))
        .route("/admin/overview", get(handle_admin_overview))
        .route("/admin/capacity", post(handle_set_capacity))
        .route("/admin/fourth_slot", post(handle_set_fourth_slot))
        .route("/admin/settings", post(handle_update_settings))
        .route(
            "/admin/weeks/{week}/availability",
            post(handle_set_week_availability),
        )
        .route("/admin/choices/{employee_id}", delete(handle_delete_choice))
        .route(
            "/admin/employees/{employee_id}/active",
            post(handle_set_employee_active),
        )
        .route("/admin/export/choices.csv", get(handle_export_choices))
        .route("/admin/export/weeks.csv", get(handle_export_weeks))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Summer Weeks Server");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    persistence.set_retry_policy(RetryPolicy::new(args.busy_retries, args.busy_timeout_ms))?;

    let defaults: Configuration =
        Configuration::new(args.capacity, !args.no_fourth_slot, String::new())?;
    let seeded: SeedSummary = persistence.seed(args.year, &defaults)?;
    if !seeded.settings_created {
        info!("Existing settings kept; --capacity and --no-fourth-slot ignored");
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        year: args.year,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(year = args.year, "Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
