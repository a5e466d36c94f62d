mod types;

pub use types::*;

use crate::{Error, llm::CompletionClient, prompt};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Headers attached to every `/api/chat` response in both deployment
/// variants. Names are lowercase so they can back `HeaderName::from_static`.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
];

/// Deployment-agnostic request handler: validates the payload, builds the
/// prompt, calls the completion service, and maps every failure to the JSON
/// error body the HTTP surface promises. Each adapter is a thin translation
/// layer around this.
pub struct ChatHandler {
    client: Arc<dyn CompletionClient>,
}

impl ChatHandler {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// CORS preflight: empty success, no body parsing.
    pub fn preflight() -> HandlerResponse {
        HandlerResponse {
            status: 204,
            body: None,
        }
    }

    pub fn method_not_allowed(method: &str) -> HandlerResponse {
        HandlerResponse {
            status: 405,
            body: Some(json!({
                "error": "Method not allowed. Use POST.",
                "method": method,
            })),
        }
    }

    /// Entry point for POST bodies. An unparseable body is treated the same
    /// as a missing question.
    pub async fn handle_body(&self, body: &[u8]) -> HandlerResponse {
        match serde_json::from_slice::<ChatRequest>(body) {
            Ok(request) => self.handle(request).await,
            Err(_) => Self::validation_error(),
        }
    }

    pub async fn handle(&self, request: ChatRequest) -> HandlerResponse {
        let question = match request.question.as_deref().map(str::trim) {
            Some(question) if !question.is_empty() => question.to_string(),
            _ => return Self::validation_error(),
        };

        info!(
            "Answering question ({} chars, {} context sections, language={:?})",
            question.chars().count(),
            request.context.len(),
            request.language
        );

        let prompt = prompt::build_prompt(&question, request.language.as_deref(), &request.context);

        match self.client.complete(&prompt).await {
            Ok(answer) => HandlerResponse {
                status: 200,
                body: Some(json!({ "answer": answer })),
            },
            Err(e) => Self::failure(e),
        }
    }

    fn validation_error() -> HandlerResponse {
        HandlerResponse {
            status: 400,
            body: Some(json!({ "error": "Question is required." })),
        }
    }

    /// Maps any failure to the JSON error body the HTTP surface promises.
    /// Adapters route their own setup failures through here too, so every
    /// error leaves `/api/chat` with the same shape.
    pub fn failure(err: Error) -> HandlerResponse {
        let body = match err {
            Error::Config(ref detail) => {
                // The credential detail stays server-side.
                error!("Configuration error: {}", detail);
                json!({ "error": "Server configuration error." })
            }
            Error::Upstream { status, ref message } => {
                error!("Upstream completion error {}: {}", status, message);
                json!({ "error": upstream_message(status) })
            }
            other => {
                error!("Failed to generate an answer: {}", other);
                json!({
                    "error": "Failed to generate an answer.",
                    "details": other.to_string(),
                })
            }
        };

        HandlerResponse {
            status: 500,
            body: Some(body),
        }
    }
}

/// User-facing translation of an upstream HTTP status. Three statuses get a
/// specific message; everything else is reported generically.
fn upstream_message(status: u16) -> String {
    match status {
        429 => "Rate limit exceeded. Please try again in a moment.".to_string(),
        401 => "Invalid API key. Please contact the site administrator.".to_string(),
        402 => "API quota or billing issue. Please contact the site administrator.".to_string(),
        other => format!("Upstream error {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn preflight_is_empty_204() {
        let response = ChatHandler::preflight();

        assert_eq!(response.status, 204);
        assert!(response.body.is_none());
    }

    #[test]
    fn method_not_allowed_names_the_method() {
        let response = ChatHandler::method_not_allowed("DELETE");

        assert_eq!(response.status, 405);
        let body = response.body.unwrap();
        assert_eq!(body["method"], "DELETE");
        assert!(body["error"].as_str().unwrap().contains("POST"));
    }

    #[rstest]
    #[case(429, "Rate limit exceeded. Please try again in a moment.")]
    #[case(401, "Invalid API key. Please contact the site administrator.")]
    #[case(402, "API quota or billing issue. Please contact the site administrator.")]
    #[case(503, "Upstream error 503")]
    fn upstream_status_translation(#[case] status: u16, #[case] expected: &str) {
        assert_eq!(upstream_message(status), expected);
    }
}
