use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Error surfaced to API clients. Validation and not-found failures keep
/// their message verbatim; database failures are logged and masked.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("database error")]
    Database(#[from] DbErr),
}

/// Body shared by every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            Self::Database(err) => {
                error!("database error: {err}");
                "An internal error occurred.".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
