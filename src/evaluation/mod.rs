pub mod engine;
pub mod judge;
pub mod mock;

pub use engine::Evaluator;

use serde::{Deserialize, Serialize};

use crate::config::PROMPT_PREVIEW_CHARS;

// ============================================================================
// Shared data model structs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// Local heuristic, no network.
    Mock,
    /// Forwarded to the completion service.
    Delegated,
}

impl EvaluationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationMode::Mock => "mock",
            EvaluationMode::Delegated => "delegated",
        }
    }
}

/// Body of `POST /api/evaluate`. Missing text fields deserialize as empty and
/// are rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub user_response: String,
    pub mode: Option<EvaluationMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub evaluation_text: String,
    pub score: Option<u32>,
    pub mode: EvaluationMode,
    pub prompt_echo: String,
    pub user_response_echo: String,
    pub prompt_preview: String,

    // Mock mode only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
}

/// First `PROMPT_PREVIEW_CHARS` characters of the prompt, with `...` appended
/// when anything was cut.
pub fn prompt_preview(prompt: &str) -> String {
    let mut chars = prompt.chars();
    let head: String = chars.by_ref().take(PROMPT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_prompt_untouched() {
        assert_eq!(prompt_preview("Write a haiku"), "Write a haiku");
    }

    #[test]
    fn test_preview_exactly_limit() {
        let p = "a".repeat(PROMPT_PREVIEW_CHARS);
        assert_eq!(prompt_preview(&p), p);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let p = "é".repeat(PROMPT_PREVIEW_CHARS + 10);
        let preview = prompt_preview(&p);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PROMPT_PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_request_missing_fields_default_empty() {
        let req: EvaluationRequest = serde_json::from_str(r#"{"prompt": "p"}"#).unwrap();
        assert_eq!(req.prompt, "p");
        assert!(req.user_response.is_empty());
        assert!(req.mode.is_none());
    }

    #[test]
    fn test_result_omits_mock_fields_when_absent() {
        let result = EvaluationResult {
            evaluation_text: "ok".into(),
            score: None,
            mode: EvaluationMode::Delegated,
            prompt_echo: "p".into(),
            user_response_echo: "r".into(),
            prompt_preview: "p".into(),
            strengths: None,
            weaknesses: None,
            suggestions: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["score"].is_null());
        assert_eq!(json["mode"], "delegated");
        assert_eq!(json["evaluationText"], "ok");
        assert!(json.get("strengths").is_none());
        assert!(json.get("suggestions").is_none());
    }
}
