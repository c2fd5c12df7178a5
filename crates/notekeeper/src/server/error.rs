//! HTTP error responses.
//!
//! Maps [`Error`] onto status codes and a small JSON body so every failing
//! route answers in the same shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::Error;

/// JSON body of an error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// User-facing error message.
    pub message: String,
    /// Machine-readable error code.
    pub code: String,
}

impl Error {
    /// HTTP status code and machine-readable code for this error.
    #[must_use]
    pub fn http_status(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NoteNotFound { .. } => (StatusCode::NOT_FOUND, "NOTE_NOT_FOUND"),
            Self::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.http_status();

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            debug!("Request rejected: {}", self);
        }

        let body = ErrorBody {
            message: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let (status, code) = Error::NoteNotFound { id: 1 }.http_status();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOTE_NOT_FOUND");
    }

    #[test]
    fn test_invalid_input_status() {
        let (status, code) = Error::invalid_input("missing").http_status();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "INVALID_INPUT");
    }

    #[test]
    fn test_io_error_is_internal_status() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let (status, code) = Error::from(io_err).http_status();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }

    #[test]
    fn test_into_response_status() {
        let response = Error::NoteNotFound { id: 9 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
