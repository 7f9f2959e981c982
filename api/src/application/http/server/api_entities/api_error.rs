use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calorie_tracker_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        // Processing and inference failures are folded into an
        // `AnalysisOutcome` before a handler sees them; they only reach this
        // mapping if a new core operation returns them directly.
        match error {
            CoreError::Invalid(_) | CoreError::Processing(_) => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::Inference(_) => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "E_PAYLOAD_TOO_LARGE"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();

        (
            status,
            Json(ApiErrorResponse {
                code: code.to_string(),
                message: self.to_string(),
                status: status.as_u16(),
            }),
        )
            .into_response()
    }
}
