use serde::{Deserialize, Serialize};

/// Request body for the `/chat/completions` endpoint of an OpenAI-compatible
/// service.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// The subset of the completion response we read. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Trimmed text of the first choice, if the response carries any.
    pub fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn first_text_trims_whitespace() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"content": "  the answer \n"}}]
        }))
        .unwrap();

        assert_eq!(response.first_text(), Some("the answer".to_string()));
    }

    #[test]
    fn first_text_is_none_for_missing_choices() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();

        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn first_text_is_none_for_blank_content() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"content": "   "}}]
        }))
        .unwrap();

        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn request_serializes_fixed_parameters() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::user("hello")],
            temperature: 0.4,
            max_tokens: 700,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.4).abs() < 1e-6);
        assert_eq!(value["max_tokens"], 700);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
    }
}
