//! Facade endpoint handlers.
//!
//! Every handler fetches fresh data from the upstream; nothing is kept
//! between requests.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::employees::{self, CreateEmployeeInput, DeleteOutcome, Employee};
use crate::http::error::ApiError;
use crate::http::server::AppState;

pub const DELETE_CONFIRMED: &str = "Employee deleted successfully";
pub const DELETE_UNVERIFIED: &str = "Employee deletion accepted but could not be verified";
pub const DELETE_FAILED: &str = "Application failed to remove Employee";

/// `GET /employees`
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.api.list_employees().await?;
    Ok(Json(employees))
}

/// `GET /employees/search/{name}`
pub async fn search_employees(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.api.list_employees().await?;
    Ok(Json(employees::search_by_name(employees, &name)))
}

/// `GET /employees/{id}`
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let employee = state.api.get_employee(&id).await?;
    Ok(Json(employee))
}

/// `GET /employees/highestSalary`
pub async fn get_highest_salary(State(state): State<AppState>) -> Result<Json<i64>, ApiError> {
    let employees = state.api.list_employees().await?;
    employees::highest_salary(&employees)
        .map(Json)
        .ok_or(ApiError::NoEmployees)
}

/// `GET /employees/topTenHighestEarningNames`
pub async fn get_top_earning_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let employees = state.api.list_employees().await?;
    Ok(Json(employees::top_earning_names(
        employees,
        state.behaviour.top_earners_limit,
    )))
}

/// `POST /employees`
///
/// Answers 200 rather than 201; the upstream does the same.
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeInput>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Json(input) = payload?;
    let employee = input.into_employee()?;

    let created = state.api.create_employee(&employee).await?;
    tracing::info!(employee_id = created.id, "Employee created");
    Ok(Json(created))
}

/// `DELETE /employees/{id}`
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let outcome = employees::delete_and_verify(state.api.as_ref(), &id).await?;

    let response = match outcome {
        DeleteOutcome::Confirmed => (StatusCode::OK, DELETE_CONFIRMED),
        DeleteOutcome::Unverified if state.behaviour.strict_delete_verification => {
            (StatusCode::EXPECTATION_FAILED, DELETE_FAILED)
        }
        DeleteOutcome::Unverified => (StatusCode::ACCEPTED, DELETE_UNVERIFIED),
    };
    Ok(response.into_response())
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}
