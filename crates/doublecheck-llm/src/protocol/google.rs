//! Google Generative Language API wire format types

use serde::{Deserialize, Serialize};

// -- Request types --

/// Google `generateContent` request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleRequest {
    /// Conversation contents
    pub contents: Vec<GoogleContent>,
    /// System instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GoogleContent>,
}

impl GoogleRequest {
    /// Single-turn request carrying one user prompt
    pub fn single_turn(prompt: String, system: Option<&str>) -> Self {
        Self {
            contents: vec![GoogleContent {
                role: Some("user".to_owned()),
                parts: vec![GooglePart::text(prompt)],
            }],
            system_instruction: system.map(|s| GoogleContent {
                role: None,
                parts: vec![GooglePart::text(s.to_owned())],
            }),
        }
    }
}

/// Google content object containing role and parts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleContent {
    /// Role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GooglePart>,
}

/// Individual part within a Google content object
///
/// Only text is read back; other part kinds deserialize with `text: None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GooglePart {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Whether this part is model reasoning rather than answer text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl GooglePart {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            thought: None,
        }
    }
}

// -- Response types --

/// Google `generateContent` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<GoogleCandidate>,
    /// Feedback on the prompt, set when it was blocked
    #[serde(default)]
    pub prompt_feedback: Option<GooglePromptFeedback>,
}

impl GoogleResponse {
    /// Answer text of the first candidate
    ///
    /// Concatenates its text parts, skipping reasoning parts. Empty when the
    /// response carries no text.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|p| p.thought != Some(true))
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Reason the prompt was blocked, if any
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref())
    }
}

/// Generated candidate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCandidate {
    /// Generated content (absent when the candidate was filtered)
    #[serde(default)]
    pub content: Option<GoogleContent>,
    /// Finish reason
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Prompt feedback
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePromptFeedback {
    /// Block reason (e.g. "SAFETY")
    #[serde(default)]
    pub block_reason: Option<String>,
}

// -- Error response --

/// Google error response
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleErrorResponse {
    /// Error details
    pub error: GoogleErrorDetail,
}

/// Google error detail
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleErrorDetail {
    /// HTTP status code
    #[serde(default)]
    pub code: u32,
    /// Error message
    #[serde(default)]
    pub message: String,
    /// Error status string
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_and_user_role() {
        let request = GoogleRequest::single_turn("review".to_owned(), None);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "review");
        assert!(json.get("systemInstruction").is_none());
        assert!(json["contents"][0]["parts"][0].get("thought").is_none());
    }

    #[test]
    fn request_carries_system_instruction() {
        let request = GoogleRequest::single_turn("review".to_owned(), Some("be strict"));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be strict");
    }

    #[test]
    fn response_text_concatenates_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "- issue one\n"}, {"text": "Verdict: [APPROVED]"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10}
        }"#;
        let response: GoogleResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.text(), "- issue one\nVerdict: [APPROVED]");
    }

    #[test]
    fn response_text_skips_thoughts_and_unknown_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [
                    {"text": "thinking...", "thought": true},
                    {"text": "answer", "thoughtSignature": "abc"},
                    {"functionCall": {"name": "x", "args": {}}}
                ]}
            }]
        }"#;
        let response: GoogleResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.text(), "answer");
    }

    #[test]
    fn blocked_response_has_empty_text() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GoogleResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.text(), "");
        assert_eq!(response.block_reason(), Some("SAFETY"));
    }

    #[test]
    fn filtered_candidate_has_empty_text() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GoogleResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.text(), "");
    }

    #[test]
    fn error_body_parses() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        let error: GoogleErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(error.error.code, 400);
        assert_eq!(error.error.message, "API key not valid.");
        assert_eq!(error.error.status, "INVALID_ARGUMENT");
    }
}
