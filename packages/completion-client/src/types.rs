//! Completion API request and response types.

use serde::{Deserialize, Serialize};

/// Text completion request.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model to use (e.g., "gpt-3.5-turbo-instruct")
    pub model: String,

    /// Prompt text to complete
    pub prompt: String,

    /// Maximum tokens in the completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Create a new completion request with the given model and prompt.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Set max tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Text completion response.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text of the top completion choice
    pub text: String,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Raw completion response from the API (for internal parsing).
#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponseRaw {
    pub choices: Vec<CompletionChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionChoice {
    pub text: String,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,

    /// Tokens in the completion
    pub completion_tokens: u32,

    /// Total tokens used
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_request_builder() {
        let req = CompletionRequest::new("gpt-3.5-turbo-instruct", "Price this item")
            .max_tokens(150)
            .temperature(0.0);

        assert_eq!(req.model, "gpt-3.5-turbo-instruct");
        assert_eq!(req.prompt, "Price this item");
        assert_eq!(req.max_tokens, Some(150));
        assert_eq!(req.temperature, Some(0.0));
    }

    #[test]
    fn test_request_serialization_skips_unset_options() {
        let req = CompletionRequest::new("gpt-3.5-turbo-instruct", "hello");
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["model"], "gpt-3.5-turbo-instruct");
        assert_eq!(json["prompt"], "hello");
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_request_serialization_carries_options() {
        let req = CompletionRequest::new("gpt-3.5-turbo-instruct", "hello")
            .max_tokens(150)
            .temperature(0.0);
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["max_tokens"], 150);
        assert_eq!(json["temperature"], 0.0);
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "choices": [{"text": "A fair price is $15.00."}],
            "usage": {"prompt_tokens": 50, "completion_tokens": 10, "total_tokens": 60}
        }"#;

        let raw: CompletionResponseRaw = serde_json::from_str(body).unwrap();
        assert_eq!(raw.choices.len(), 1);
        assert_eq!(raw.choices[0].text, "A fair price is $15.00.");
        assert_eq!(raw.usage.unwrap().total_tokens, 60);
    }

    #[test]
    fn test_response_deserialization_without_usage() {
        let body = r#"{"choices": [{"text": "ok"}]}"#;

        let raw: CompletionResponseRaw = serde_json::from_str(body).unwrap();
        assert!(raw.usage.is_none());
    }
}
