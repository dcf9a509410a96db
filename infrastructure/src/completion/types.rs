//! Chat completions wire types (OpenAI-compatible)

use serde::{Deserialize, Serialize};

/// Request body for `POST {base}/chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", "assistant"
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Successful response body; only the fields we read.
#[derive(Debug, Deserialize)]
pub struct ChatResponseRaw {
    #[serde(default)]
    pub choices: Vec<ChoiceRaw>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceRaw {
    pub message: ChoiceMessageRaw,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessageRaw {
    /// Null for refusals and tool-only replies
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponseRaw {
    /// Text of the first choice; empty when there is none.
    pub fn first_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_expected_shape() {
        let request = ChatRequest {
            model: "m".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            temperature: 0.0,
            max_tokens: 128,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 128);
    }

    #[test]
    fn test_first_text() {
        let raw: ChatResponseRaw = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"42"}},{"message":{"content":"x"}}]}"#,
        )
        .unwrap();
        assert_eq!(raw.first_text(), "42");
    }

    #[test]
    fn test_first_text_missing_parts() {
        let raw: ChatResponseRaw = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(raw.first_text(), "");

        let raw: ChatResponseRaw =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(raw.first_text(), "");

        let raw: ChatResponseRaw = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(raw.first_text(), "");
    }
}
