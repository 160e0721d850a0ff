//! # Error Handling Middleware
//!
//! Maps `PlanError` values to HTTP status codes and JSON bodies so every
//! endpoint reports failures the same way.
//!
//! Rejected proposals carry their machine-readable reason alongside the
//! message, letting a client show the user which rule a session broke.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use studyplan_core::errors::PlanError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use studyplan_api::middleware::error_handling::AppError;
/// use studyplan_core::errors::PlanError;
/// use uuid::Uuid;
///
/// async fn handler(id: Uuid) -> Result<Json<()>, AppError> {
///     Err(AppError(PlanError::NotFound(format!("Study plan with ID {} not found", id))))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub PlanError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PlanError::NotFound(_) => StatusCode::NOT_FOUND,
            PlanError::Validation(_) => StatusCode::BAD_REQUEST,
            PlanError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlanError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PlanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = match &self.0 {
            PlanError::Rejected(reason) => Json(json!({ "error": message, "reason": reason })),
            _ => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

/// Allows `?` on `PlanResult` values inside handlers.
impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError(err)
    }
}

/// Repository failures surface as database errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(PlanError::Database(err))
    }
}

pub fn map_error(err: PlanError) -> Response {
    AppError(err).into_response()
}
