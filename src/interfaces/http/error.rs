//! HTTP error responses
//!
//! Maps failures to status codes and JSON bodies. Internal failures are
//! reported with a fixed message; their details only go to the logs.

use super::request::FieldErrors;
use crate::domain::validation::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not valid JSON for the endpoint
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// One or more request fields are missing or invalid
    #[error("Validation failed")]
    InvalidFields(FieldErrors),

    /// The domain rejected the order
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Order {0} not found")]
    NotFound(u64),

    /// Anything the client cannot fix
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::InvalidFields(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应体
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.to_string();
        let errors = match self {
            ApiError::InvalidFields(fields) => Some(fields),
            _ => None,
        };

        (status, Json(ErrorBody { error, errors })).into_response()
    }
}
