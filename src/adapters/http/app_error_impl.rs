use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_error::{AppError, FieldError};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::Database(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database operation failed",
                None,
            ),
            AppError::Validation(errors) => {
                error_resp(StatusCode::BAD_REQUEST, "Validation failed", Some(errors))
            }
            AppError::Duplicate => error_resp(
                StatusCode::BAD_REQUEST,
                "A record with this value already exists",
                None,
            ),
            AppError::InvalidCredentials => {
                error_resp(StatusCode::UNAUTHORIZED, "Invalid credentials", None)
            }
            AppError::Forbidden => error_resp(StatusCode::FORBIDDEN, "Forbidden", None),
            AppError::NotFound => error_resp(StatusCode::NOT_FOUND, "Not found", None),
            AppError::Internal(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                None,
            ),
        }
    }
}

fn error_resp(status: StatusCode, message: &str, errors: Option<Vec<FieldError>>) -> Response {
    let body = match errors {
        Some(errors) => serde_json::json!({
            "success": false,
            "message": message,
            "errors": errors,
        }),
        None => serde_json::json!({ "success": false, "message": message }),
    };
    (status, Json(body)).into_response()
}
