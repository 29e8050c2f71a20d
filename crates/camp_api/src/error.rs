//! HTTP error mapping.
//!
//! # Invariants
//! - Client faults answer `400 {"errors": [msg]}`.
//! - Missing records answer `404 {"error": "<Kind> not found"}`.
//! - Storage faults are logged and answer a generic 500 without details.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use camp_core::{EntityKind, RepoError, ValidationError};
use log::error;
use serde_json::json;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    /// Input rejected before anything was written.
    BadRequest(String),
    NotFound(EntityKind),
    Repo(RepoError),
    Internal(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::NotFound(kind) => write!(f, "{kind} not found"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        Self::BadRequest(value.to_string())
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => err.into(),
            RepoError::NotFound { kind, .. } => Self::NotFound(kind),
            RepoError::Integrity(_) => ValidationError::SignupReferenceMissing.into(),
            other => Self::Repo(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": [message] })),
            )
                .into_response(),
            Self::NotFound(kind) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{kind} not found") })),
            )
                .into_response(),
            Self::Repo(err) => {
                error!("event=request_failed module=api status=error error_code=repo error={err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An internal database error occurred" })),
                )
                    .into_response()
            }
            Self::Internal(message) => {
                error!(
                    "event=request_failed module=api status=error error_code=internal error={message}"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An internal server error occurred" })),
                )
                    .into_response()
            }
        }
    }
}
