//! Axum integration for the unified error type

use super::types::{ApiResponse, AppError};
use axum::Json;
use axum::response::{IntoResponse, Response};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            // `details` never reaches a 5xx response body; it lands in
            // the log instead.
            tracing::error!(
                code = %self.code,
                message = %self.message,
                details = ?self.details,
                "request failed"
            );
        }
        let body = Json(ApiResponse::<()>::error(&self));
        (status, body).into_response()
    }
}
