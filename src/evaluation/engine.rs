use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use super::judge::{build_completion_request, parse_evaluation_response};
use super::mock::evaluate_mock;
use super::{prompt_preview, EvaluationMode, EvaluationResult};
use crate::completion::CompletionProvider;
use crate::error::TrainerError;

/// Scores a prompt/response pair, either locally or through the completion
/// service. Holds no per-request state.
#[derive(Clone)]
pub struct Evaluator {
    completion: Option<Arc<dyn CompletionProvider>>,
}

impl Evaluator {
    pub fn new(completion: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { completion }
    }

    /// Evaluator with no completion service; delegated mode always fails.
    pub fn mock_only() -> Self {
        Self { completion: None }
    }

    pub fn has_completion(&self) -> bool {
        self.completion.is_some()
    }

    /// Delegated when a completion service is configured, Mock otherwise.
    pub fn default_mode(&self) -> EvaluationMode {
        if self.has_completion() {
            EvaluationMode::Delegated
        } else {
            EvaluationMode::Mock
        }
    }

    pub async fn evaluate(
        &self,
        prompt: &str,
        user_response: &str,
        mode: EvaluationMode,
    ) -> Result<EvaluationResult, TrainerError> {
        validate_inputs(prompt, user_response)?;

        match mode {
            EvaluationMode::Mock => Ok(evaluate_mock(prompt, user_response)),
            EvaluationMode::Delegated => self.evaluate_delegated(prompt, user_response).await,
        }
    }

    async fn evaluate_delegated(
        &self,
        prompt: &str,
        user_response: &str,
    ) -> Result<EvaluationResult, TrainerError> {
        let completion = self
            .completion
            .as_ref()
            .ok_or(TrainerError::UpstreamUnavailable)?;

        let request = build_completion_request(prompt, user_response);
        let started = Instant::now();
        let raw = completion.complete(&request).await.map_err(|e| {
            warn!("Delegated evaluation failed: {}", e);
            TrainerError::from(e)
        })?;

        let parsed = parse_evaluation_response(&raw);
        info!(
            "Delegated evaluation finished in {}ms (score: {:?})",
            started.elapsed().as_millis(),
            parsed.score
        );

        Ok(EvaluationResult {
            evaluation_text: parsed.evaluation_text,
            score: parsed.score,
            mode: EvaluationMode::Delegated,
            prompt_echo: prompt.to_string(),
            user_response_echo: user_response.to_string(),
            prompt_preview: prompt_preview(prompt),
            strengths: None,
            weaknesses: None,
            suggestions: None,
        })
    }
}

/// Both fields must be present and non-empty. Whitespace is content.
pub fn validate_inputs(prompt: &str, user_response: &str) -> Result<(), TrainerError> {
    let mut missing = Vec::new();
    if prompt.is_empty() {
        missing.push("prompt");
    }
    if user_response.is_empty() {
        missing.push("userResponse");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TrainerError::Validation(format!(
            "{} must not be empty",
            missing.join(" and ")
        )))
    }
}
