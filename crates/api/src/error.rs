use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use sekolah_core::error::CoreError;
use sekolah_db::StoreError;

/// Maximum length of upstream error detail allowed into a response body.
const MAX_ERROR_DETAIL: usize = 120;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses: validation problems are client errors, storage problems are
/// server errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sekolah_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `sekolah_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Demonstration-data seeding aborted part-way through.
    #[error("Seeding failed: {0}")]
    SeedFailed(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                msg.clone(),
            ),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_UNAVAILABLE",
                    truncate_detail(&err.to_string()),
                )
            }
            AppError::SeedFailed(detail) => {
                tracing::error!(error = %detail, "Seeding failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SEED_FAILED",
                    format!("Seeding failed: {}", truncate_detail(detail)),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Clip upstream error text to a short prefix so driver internals (and any
/// credentials embedded in connection errors) stay out of response bodies.
pub(crate) fn truncate_detail(detail: &str) -> String {
    if detail.len() <= MAX_ERROR_DETAIL {
        return detail.to_string();
    }
    let mut end = MAX_ERROR_DETAIL;
    while !detail.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &detail[..end])
}
