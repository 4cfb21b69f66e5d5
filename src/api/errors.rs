use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::Serialize;
use std::fmt;
use tracing::error;

use crate::auth::AuthError;
use crate::errors::Error;

/// Uniform JSON failure envelope returned by every endpoint
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError({}, {})", self.error, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

/// Helper function to create API errors
pub fn api_error(status: StatusCode, message: &str) -> ApiError {
    ApiError {
        success: false,
        error: status.as_u16(),
        message: message.to_string(),
    }
}

pub fn not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "Resource not found")
}

pub fn bad_request() -> ApiError {
    api_error(StatusCode::BAD_REQUEST, "bad request")
}

pub fn unprocessable() -> ApiError {
    api_error(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
}

pub fn internal_error() -> ApiError {
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::DieselError(DieselError::NotFound) => not_found(),
            Error::DieselError(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            )) => unprocessable(),
            other => {
                error!("Store failure: {}", other);
                internal_error()
            }
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        error!("Connection pool failure: {}", err);
        internal_error()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        error!("Stored payload could not be (de)serialized: {}", err);
        internal_error()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = match err {
            AuthError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        };
        api_error(status, &err.to_string())
    }
}
