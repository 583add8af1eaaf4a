use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub has_credential: bool,
    pub mode: String,
    pub version: String,
    pub started_at: String,
    pub timestamp: String,
}

/// GET /api/health — always 200, whatever the credential state.
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(build_health_response(&state))
}

pub fn build_health_response(state: &SharedState) -> HealthResponse {
    // The completion client only exists when a credential was configured.
    let has_credential = state.evaluator.has_completion();
    let message = if has_credential {
        "Prompt trainer backend is ready"
    } else {
        "Prompt trainer backend is ready (mock mode, no API key configured)"
    };

    HealthResponse {
        status: "ok".to_string(),
        message: message.to_string(),
        has_credential,
        mode: state.evaluator.default_mode().as_str().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at.to_rfc3339(),
        timestamp: Utc::now().to_rfc3339(),
    }
}
