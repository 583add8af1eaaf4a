use super::{prompt_preview, EvaluationMode, EvaluationResult};

pub const MOCK_FEEDBACK: &str =
    "This is mock feedback. Add your OpenAI API key for real AI analysis.";
pub const MOCK_STRENGTHS: &[&str] = &["Good structure", "Clear intent"];
pub const MOCK_WEAKNESSES: &[&str] = &["Could be more specific", "Needs examples"];
pub const MOCK_SUGGESTIONS: &str = "Try adding specific examples and constraints to your prompt.";

pub const MOCK_BASE_SCORE: u32 = 60;
pub const MOCK_MAX_SCORE: u32 = 100;
const CHARS_PER_POINT: usize = 5;

/// `min(100, 60 + floor(chars / 5))`.
pub fn mock_score(prompt: &str) -> u32 {
    let bonus = prompt.chars().count() / CHARS_PER_POINT;
    let bonus = u32::try_from(bonus).unwrap_or(u32::MAX);
    MOCK_BASE_SCORE.saturating_add(bonus).min(MOCK_MAX_SCORE)
}

pub fn evaluate_mock(prompt: &str, user_response: &str) -> EvaluationResult {
    EvaluationResult {
        evaluation_text: MOCK_FEEDBACK.to_string(),
        score: Some(mock_score(prompt)),
        mode: EvaluationMode::Mock,
        prompt_echo: prompt.to_string(),
        user_response_echo: user_response.to_string(),
        prompt_preview: prompt_preview(prompt),
        strengths: Some(MOCK_STRENGTHS.iter().map(|s| s.to_string()).collect()),
        weaknesses: Some(MOCK_WEAKNESSES.iter().map(|s| s.to_string()).collect()),
        suggestions: Some(MOCK_SUGGESTIONS.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_floor() {
        assert_eq!(mock_score("a"), 60);
        assert_eq!(mock_score("abcd"), 60);
        assert_eq!(mock_score("abcde"), 61);
    }

    #[test]
    fn test_score_clamped() {
        assert_eq!(mock_score(&"x".repeat(200)), 100);
        assert_eq!(mock_score(&"x".repeat(10_000)), 100);
    }

    #[test]
    fn test_score_monotonic() {
        let mut last = 0;
        for len in 1..300 {
            let s = mock_score(&"w".repeat(len));
            assert!(s >= last, "score dropped at length {}", len);
            assert!((60..=100).contains(&s));
            last = s;
        }
    }

    #[test]
    fn test_score_counts_chars_not_bytes() {
        // 5 two-byte characters
        assert_eq!(mock_score("ééééé"), 61);
    }

    #[test]
    fn test_template_is_input_independent() {
        let a = evaluate_mock("short", "x");
        let b = evaluate_mock(&"long prompt ".repeat(20), "something else entirely");
        assert_eq!(a.evaluation_text, b.evaluation_text);
        assert_eq!(a.strengths, b.strengths);
        assert_eq!(a.weaknesses, b.weaknesses);
        assert_eq!(a.suggestions, b.suggestions);
        assert_eq!(a.mode, EvaluationMode::Mock);
        assert_eq!(b.user_response_echo, "something else entirely");
    }
}
