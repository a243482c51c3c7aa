use serde::{Deserialize, Serialize};

use crate::utils::error::OptimizeError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
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

/// Body of `POST {base}/chat/completions`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Decode a successful response into the trimmed text of the first choice.
pub fn decode_completion(body: &str) -> Result<String, OptimizeError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| OptimizeError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| OptimizeError::MalformedResponse("no choices".to_string()))?;

    let content = choice
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| {
            OptimizeError::MalformedResponse("choice has no message content".to_string())
        })?;

    let content = content.trim();
    if content.is_empty() {
        return Err(OptimizeError::MalformedResponse("empty completion".to_string()));
    }
    Ok(content.to_string())
}

/// Server supplied `error.message`, if the body carries one.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()?
        .error?
        .message
        .filter(|m| !m.trim().is_empty())
}
