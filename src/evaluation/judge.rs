use regex::Regex;
use std::sync::LazyLock;

use crate::completion::CompletionRequest;
use crate::config::{COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE};

pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant that evaluates responses to prompts.";

// Numerator is not range-checked: "95/10" yields 95.
static SCORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{1,2})/10").unwrap());

/// Free-text judge output split into the raw text and the extracted score.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEvaluation {
    pub evaluation_text: String,
    pub score: Option<u32>,
}

/// Build the rubric instruction for the LLM judge.
pub fn build_evaluation_prompt(prompt: &str, user_response: &str) -> String {
    format!(
        r#"Please evaluate the following response to a writing prompt.

## Prompt
{prompt}

## Response
{user_response}

## Evaluation Criteria
Assess the response on:
1. Relevance - how well it addresses the prompt
2. Clarity - how clear and well organized it is
3. Creativity - originality of ideas and expression
4. Overall quality

Give specific feedback for each criterion, then finish with an overall score out of 10 written exactly as "Score: N/10"."#
    )
}

pub fn build_completion_request(prompt: &str, user_response: &str) -> CompletionRequest {
    CompletionRequest {
        system: SYSTEM_INSTRUCTION.to_string(),
        user: build_evaluation_prompt(prompt, user_response),
        max_tokens: COMPLETION_MAX_TOKENS,
        temperature: COMPLETION_TEMPERATURE,
    }
}

/// First `N/10` numerator in the text, if any.
pub fn extract_score(raw: &str) -> Option<u32> {
    SCORE_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn parse_evaluation_response(raw: &str) -> ParsedEvaluation {
    ParsedEvaluation {
        evaluation_text: raw.to_string(),
        score: extract_score(raw),
    }
}
