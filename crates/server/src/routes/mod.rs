use axum::http::Uri;

use crate::error::ApiError;

pub mod health;
pub mod reservation;
pub mod table;

/// Fallback for unknown paths, keeping the JSON error envelope.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Path not found: {uri}"))
}
