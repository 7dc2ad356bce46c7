use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::security::PayloadError;

/// Message returned to the caller for every failure; callers log the details.
pub const GENERIC_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("Failed to serialize response: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl HookError {
    /// Whether the failure was caused by the inbound body rather than by this service.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, HookError::Payload(_))
    }
}

impl IntoResponse for HookError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": GENERIC_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
