//! The only way a handler builds a response: every body passes the redactor

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::debug;
use tyb_core::ApiError;
use tyb_security::Redactor;

pub fn respond(redactor: &Redactor, status: StatusCode, body: &Value) -> Response {
    let (clean, count) = redactor.redact_value_counted(body);
    if count > 0 {
        debug!(count, status = status.as_u16(), "redacted secrets from response");
    }
    (status, Json(clean)).into_response()
}

pub fn respond_error(redactor: &Redactor, err: &ApiError) -> Response {
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    respond(redactor, status, &err.body())
}
