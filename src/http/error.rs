//! JSON error responses.
//!
//! Every client-facing failure is answered with a status code and a body of
//! the form `{"err": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error body sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub err: String,
}

impl ApiError {
    pub fn new(err: impl Into<String>) -> Self {
        Self { err: err.into() }
    }
}

/// Send `error` as JSON with the given status.
pub fn send_error(status: StatusCode, error: ApiError) -> Response {
    (status, Json(error)).into_response()
}
