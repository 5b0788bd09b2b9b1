//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` for
//! automatic error handling in API endpoints.
//!
//! Controllers collapse unexpected failures into a per-operation message with
//! [`AppError::fail_with`], so clients see a stable string such as
//! `"Failed to create page"` while the underlying cause is logged.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request body exceeded the configured size limit.
    ///
    /// Results in 413 Payload Too Large.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Request body sent without a JSON `Content-Type`.
    ///
    /// Results in 415 Unsupported Media Type.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Operation failure reported to the client with a fixed message.
    ///
    /// Results in 500 Internal Server Error with `message` as the response body;
    /// `source` is only logged.
    #[error("{message}: {source}")]
    Failed {
        message: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Wraps this error into [`AppError::Failed`] with a client-facing message.
    ///
    /// `NotFound` and `BadRequest` pass through unchanged so their status codes
    /// and messages survive the controller's catch boundary.
    pub fn fail_with(self, message: &str) -> Self {
        match self {
            Self::NotFound(_)
            | Self::BadRequest(_)
            | Self::PayloadTooLarge(_)
            | Self::UnsupportedMediaType(_)
            | Self::Failed { .. } => self,
            err => Self::Failed {
                message: message.to_string(),
                source: Box::new(err),
            },
        }
    }
}

/// Body rejections keep their status: oversized bodies are 413, a missing JSON
/// content type is 415 and malformed or mistyped JSON is 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => {
                AppError::UnsupportedMediaType(rejection.body_text())
            }
            _ => AppError::BadRequest(rejection.body_text()),
        }
    }
}

/// A path segment that does not parse as an ID cannot name a stored record.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                AppError::NotFound("Not found".to_string())
            }
            other => AppError::Failed {
                message: "Internal server error".to_string(),
                source: Box::new(AppError::BadRequest(other.body_text())),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 413 Payload Too Large - For `PayloadTooLarge` variant
/// - 415 Unsupported Media Type - For `UnsupportedMediaType` variant
/// - 500 Internal Server Error - `Failed` with its own message, everything else with
///   a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, Json(ErrorDto { error: msg })).into_response()
            }
            Self::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorDto { error: msg }),
            )
                .into_response(),
            Self::Failed { message, source } => {
                tracing::error!("{}: {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto { error: message }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
