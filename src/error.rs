use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::completion::CompletionError;

#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No completion service credential is configured")]
    UpstreamUnavailable,

    #[error("Completion service error: {0}")]
    Upstream(String),
}

impl TrainerError {
    /// Short, stable summary for the `error` field of the response body.
    pub fn summary(&self) -> &'static str {
        match self {
            TrainerError::Validation(_) => "Invalid request",
            TrainerError::UpstreamUnavailable => "Evaluation service unavailable",
            TrainerError::Upstream(_) => "Failed to evaluate response",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TrainerError::Validation(_) => StatusCode::BAD_REQUEST,
            TrainerError::UpstreamUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            TrainerError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CompletionError> for TrainerError {
    fn from(e: CompletionError) -> Self {
        TrainerError::Upstream(e.to_string())
    }
}

impl IntoResponse for TrainerError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.summary(),
            "details": self.to_string(),
        });

        (self.status(), axum::Json(body)).into_response()
    }
}
