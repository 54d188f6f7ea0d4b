//! Protocol rejection errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Client-input errors terminating a request before any backend call.
///
/// Every variant maps to a terminal status with an empty body; none of
/// them surface as a panic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("malformed request path")]
    BadPath,

    #[error("malformed request body")]
    BadBody,

    #[error("missing or malformed authorization")]
    Unauthorized,

    #[error("unknown resource")]
    NotFound,
}

impl ProtocolError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProtocolError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProtocolError::BadPath | ProtocolError::BadBody => StatusCode::BAD_REQUEST,
            ProtocolError::Unauthorized => StatusCode::UNAUTHORIZED,
            ProtocolError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ProtocolError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, status = %self.status(), "Rejected protocol request");
        self.status().into_response()
    }
}
