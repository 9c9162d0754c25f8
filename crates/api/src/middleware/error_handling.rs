//! # Error Handling Middleware
//!
//! Maps [`SihraError`] to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sihra_core::errors::SihraError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use sihra_api::middleware::error_handling::AppError;
/// use sihra_core::errors::SihraError;
///
/// async fn handler(teacher_id: String) -> Result<Json<String>, AppError> {
///     if teacher_id.is_empty() {
///         return Err(AppError(SihraError::Validation("teacher id is empty".to_string())));
///     }
///     Ok(Json(teacher_id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SihraError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SihraError::NotFound(_) => StatusCode::NOT_FOUND,
            SihraError::Validation(_) => StatusCode::BAD_REQUEST,
            SihraError::Authentication(_) => StatusCode::UNAUTHORIZED,
            SihraError::Authorization(_) => StatusCode::FORBIDDEN,
            SihraError::Upstream(_) => StatusCode::BAD_GATEWAY,
            SihraError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows using `?` on `SihraResult` inside handlers.
impl From<SihraError> for AppError {
    fn from(err: SihraError) -> Self {
        AppError(err)
    }
}
