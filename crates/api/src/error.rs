use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fabmon_core::error::CoreError;
use fabmon_core::types::DbId;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Domain errors keep their kind; storage errors are opaque to callers.
/// Unique violations are turned into [`CoreError::Conflict`] by the handler
/// that knows which field was taken (see `handlers::equipment::create`), so
/// any `Database` error reaching the response is a 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fabmon_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a missing equipment row.
    pub fn equipment_not_found(id: DbId) -> Self {
        AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        })
    }

    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Core(CoreError::Conflict(_)) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Not found");
                format!("{entity} with id {id} not found")
            }
            AppError::Core(CoreError::Validation(msg) | CoreError::Conflict(msg)) => msg.clone(),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                "An internal error occurred".to_string()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
