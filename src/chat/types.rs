use crate::prompt::ContextSection;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Normalized inbound request shape shared by both deployment adapters.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_sections")]
    pub context: Vec<ContextSection>,
}

/// Normalized outbound response shape: the adapter translates this into its
/// platform's native response, attaching the CORS headers.
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: Option<Value>,
}

// A malformed `context` degrades to "no context" instead of rejecting the
// whole request.
fn lenient_sections<'de, D>(deserializer: D) -> Result<Vec<ContextSection>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
