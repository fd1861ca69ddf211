use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found")]
    NotFound,
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),
}

/// A single error entry in an error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorObject {
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Donor not found")]
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorObject>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Donor not found".to_string()),
            AppError::StorageError(e) => {
                tracing::error!("Storage error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save donor data".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            errors: vec![ErrorObject {
                status: status.as_u16(),
                detail,
            }],
        };

        (status, Json(body)).into_response()
    }
}
