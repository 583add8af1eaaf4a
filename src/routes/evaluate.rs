use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::error::TrainerError;
use crate::evaluation::{EvaluationMode, EvaluationRequest, EvaluationResult};
use crate::state::SharedState;

/// POST /api/evaluate — score a prompt/response pair.
pub async fn evaluate(
    State(state): State<SharedState>,
    body: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Json<EvaluationResult>, TrainerError> {
    let Json(req) = body.map_err(|e| TrainerError::Validation(e.body_text()))?;

    let mode = req.mode.unwrap_or_else(|| state.evaluator.default_mode());
    info!(
        "Evaluating response ({} mode, prompt {} chars, response {} chars)",
        mode.as_str(),
        req.prompt.chars().count(),
        req.user_response.chars().count()
    );

    let result = state
        .evaluator
        .evaluate(&req.prompt, &req.user_response, mode)
        .await?;

    if mode == EvaluationMode::Mock && !state.config.mock_delay.is_zero() {
        debug!("Simulating latency of {:?}", state.config.mock_delay);
        tokio::time::sleep(state.config.mock_delay).await;
    }

    Ok(Json(result))
}
