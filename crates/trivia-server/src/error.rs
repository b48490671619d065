//! Translation of operation errors into HTTP responses
//!
//! Every failure leaves the server as `{success: false, error, message}`
//! where `error` repeats the status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use trivia_core::{ErrorKind, TriviaError};

/// An operation failure on its way to the client
#[derive(Debug)]
pub struct ApiError(pub TriviaError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(self.0.kind())
    }
}

impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        Self(err)
    }
}

/// Status code for each failure kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound | ErrorKind::OutOfRange => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self.0.kind() {
            ErrorKind::Internal => {
                error!("Internal error: {}", self.0);
                "Internal server error".to_string()
            }
            kind => {
                warn!("Request failed ({}): {}", kind.as_str(), self.0);
                self.0.to_string()
            }
        };

        error_response(status, message)
    }
}

/// Uniform failure body with an explicit status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = json!({
        "success": false,
        "error": status.as_u16(),
        "message": message.into(),
    });
    (status, Json(body)).into_response()
}
