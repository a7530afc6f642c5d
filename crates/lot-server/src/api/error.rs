//! Shared error responses for the API handlers.
//!
//! 400 for missing or invalid input, 404 for an absent row, 500 for
//! unexpected database failures (with the message passed through).

use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

pub(crate) type ApiError = (StatusCode, Json<Value>);

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message.into() })),
    )
}

pub(crate) fn not_found(message: impl Into<String>) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": message.into() })),
    )
}

pub(crate) fn db_error(context: &str, err: anyhow::Error) -> ApiError {
    tracing::error!("{}: {}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": format!("{}: {}", context, err) })),
    )
}
