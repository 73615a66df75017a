use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::directory::EmployeeDirectory;
use crate::error::Error;
use crate::model::{CreateEmployeeInput, DeleteEmployeeInput};
use crate::rate_limiter::RateLimiter;
use crate::response::ApiResponse;

/// The legacy top-earner endpoint is fixed at ten names.
const TOP_EARNER_COUNT: usize = 10;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<EmployeeDirectory>,
    pub limiter: Arc<RateLimiter>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub employees: usize,
}

pub async fn list_employees(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let employees = state.directory.list()?;
    tracing::info!(count = employees.len(), "fetched all employees");
    Ok(Json(employees))
}

pub async fn search_employees(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> Result<impl IntoResponse, Error> {
    if search.trim().is_empty() {
        tracing::warn!("received blank search string");
        return Err(Error::InvalidRequest(
            "search string must not be blank".to_string(),
        ));
    }

    let employees = state.directory.search_by_name(&search)?;
    tracing::info!(count = employees.len(), search = %search, "searched employees by name");
    Ok(Json(employees))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_employee_id(&id)?;
    match state.directory.find_by_id(id)? {
        Some(employee) => Ok(Json(employee)),
        None => {
            tracing::warn!(id = %id, "employee not found");
            Err(Error::NotFound)
        }
    }
}

pub async fn highest_salary(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    match state.directory.highest_salary()? {
        Some(salary) => {
            tracing::info!(salary, "highest salary found");
            Ok(Json(salary))
        }
        None => {
            tracing::warn!("no employees with a salary present");
            Err(Error::NotFound)
        }
    }
}

pub async fn top_earners(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let names = state.directory.top_earners(TOP_EARNER_COUNT)?;
    tracing::info!(count = names.len(), "fetched top earning employee names");
    Ok(Json(names))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployeeInput>,
) -> Result<impl IntoResponse, Error> {
    input.validate()?;
    require_not_blank(input.name.as_deref(), "name")?;
    require_not_blank(input.title.as_deref(), "title")?;

    let employee = state.directory.create(&input)?;
    tracing::info!(id = %employee.id, "created employee");
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn delete_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_employee_id(&id)?;
    if state.directory.delete_by_id(id)? {
        tracing::info!(id = %id, "deleted employee");
        Ok("Employee deleted successfully")
    } else {
        Err(Error::NotFound)
    }
}

/// Legacy delete-by-name endpoint. Unlike the rest of the surface it always
/// answers 200 with an envelope, reporting failures inside the body.
pub async fn delete_employee_by_name(
    State(state): State<AppState>,
    Json(input): Json<DeleteEmployeeInput>,
) -> Result<impl IntoResponse, Error> {
    if input.validate().is_err() || require_not_blank(input.name.as_deref(), "name").is_err() {
        tracing::warn!("validation failed for legacy employee deletion");
        return Ok(Json(ApiResponse::<bool>::error("Validation failed")));
    }

    let name = input.name.as_deref().unwrap_or("");
    match state.directory.delete_by_name(name) {
        Ok(deleted) => {
            tracing::info!(name = %name, deleted, "legacy delete by name");
            Ok(Json(ApiResponse::handled_with(deleted)))
        }
        Err(err) => {
            tracing::error!(name = %name, error = %err, "legacy delete failed");
            Ok(Json(ApiResponse::error("Failed to delete employee")))
        }
    }
}

/// Liveness endpoint; reports the current directory size.
pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let employees = state.directory.count()?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        employees,
    }))
}

fn parse_employee_id(raw: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!(id = %raw, "invalid employee id format");
        Error::InvalidId
    })
}

fn require_not_blank(value: Option<&str>, field: &str) -> Result<(), Error> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(Error::Validation(format!("{} must not be blank", field))),
    }
}
