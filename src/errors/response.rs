use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::errors::AppError;

// Every error leaves the service as an `{"error": message}` JSON body.
// Internal failures are logged here and surfaced as a generic 500 so
// store or hashing detail never reaches the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::DuplicateUsername => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::TaskNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            AppError::Redis(_)
            | AppError::Bcrypt(_)
            | AppError::Session(_)
            | AppError::Serde(_)
            | AppError::Join(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
