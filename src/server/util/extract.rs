//! Request extractors whose rejections are reported as `ErrorDto` responses.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// `axum::Json` with rejections mapped through `AppError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path`; an unparsable ID answers 404 instead of plain-text 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `axum::extract::Query` with malformed query strings answered as `ErrorDto` 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
