//! Request extractors whose rejections use the application error shape.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies; these
//! wrappers route the rejection through [`AppError`] so every 400 carries
//! the same `{"error": {...}}` JSON envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Malformed or missing bodies become `AppError::BadRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. Values that fail to parse become `AppError::BadRequest`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
