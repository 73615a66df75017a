use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid employee ID format")]
    InvalidId,

    #[error("Employee not found")]
    NotFound,

    #[error("Request rate limit exceeded")]
    RateLimited { retry_after_secs: u64 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Error::Validation(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str, code: u16) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            code,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            Error::InvalidRequest(_) | Error::InvalidId => (StatusCode::BAD_REQUEST, "bad_request"),
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            Error::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            Error::RateLimited { .. } => (StatusCode::TOO_MANY_REQUESTS, "rate_limit_exceeded"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        // Internal detail goes to the log, never over the wire.
        let message = match &self {
            Error::Internal(detail) => {
                tracing::error!(
                    target: "employee_directory::error",
                    detail = %detail,
                    "internal error while handling request"
                );
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse::new(kind, &message, status.as_u16());
        let mut response = (status, Json(body)).into_response();

        if let Error::RateLimited { retry_after_secs } = self {
            if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                response.headers_mut().insert("Retry-After", value);
            }
        }

        response
    }
}
