/// Error types for Adder Service
///
/// Client input errors are rendered as `422 Unprocessable Entity` with a
/// `detail` list describing each rejected parameter. Everything else is an
/// internal error rendered as `{"error": ..., "status": ...}`.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

use crate::services::IntParseError;

/// Result type for adder-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// One rejected input parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    /// Location of the offending value, e.g. `["query", "number"]`
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw value as received; `None` when the parameter was absent
    pub input: Option<String>,
}

impl ValidationDetail {
    pub fn query(field: &str, kind: &str, msg: impl Into<String>, input: Option<String>) -> Self {
        Self {
            loc: vec!["query".to_string(), field.to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
            input,
        }
    }
}

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {} ({})", .0.msg, .0.loc.join("."))]
    Validation(ValidationDetail),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// A required query parameter was absent
    pub fn missing_query(field: &str) -> Self {
        AppError::Validation(ValidationDetail::query(field, "missing", "Field required", None))
    }

    /// A query parameter was present but is not an integer
    pub fn invalid_integer(field: &str, err: IntParseError, raw: &str) -> Self {
        AppError::Validation(ValidationDetail::query(
            field,
            err.kind(),
            err.to_string(),
            Some(raw.to_string()),
        ))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Configuration(_) | AppError::Serialization(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::Validation(detail) => HttpResponse::build(status).json(serde_json::json!({
                "detail": [detail],
            })),
            _ => {
                tracing::error!(error = %self, "request failed");
                HttpResponse::build(status).json(serde_json::json!({
                    "error": self.to_string(),
                    "status": status.as_u16(),
                }))
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
