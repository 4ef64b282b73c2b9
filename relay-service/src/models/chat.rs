use crate::services::RelayError;
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply to `POST /chat`. Carries either the generated text or an
/// `Error: ...` string; failures share the success shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatResponse {
    /// Collapse the relay outcome into the single response shape clients see.
    pub fn from_outcome(outcome: Result<String, RelayError>) -> Self {
        match outcome {
            Ok(text) => Self { response: text },
            Err(err) => Self {
                response: format!("Error: {}", err),
            },
        }
    }
}

/// One chat exchange handed to the log store. The store stamps the time.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub user_message: String,
    pub ai_response: String,
}

impl LogRecord {
    pub fn new(user_message: impl Into<String>, ai_response: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            ai_response: ai_response.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ProviderError;

    #[test]
    fn success_passes_text_through() {
        let response = ChatResponse::from_outcome(Ok("Hi there".to_string()));
        assert_eq!(response.response, "Hi there");
    }

    #[test]
    fn missing_credential_has_fixed_text() {
        let response = ChatResponse::from_outcome(Err(RelayError::MissingCredential));
        assert_eq!(
            response.response,
            "Error: Gemini API key not configured. Please set GEMINI_API_KEY environment variable."
        );
    }

    #[test]
    fn provider_failure_is_prefixed() {
        let response = ChatResponse::from_outcome(Err(RelayError::Provider(
            ProviderError::NetworkError("connection reset".to_string()),
        )));
        assert_eq!(response.response, "Error: Network error: connection reset");
    }

    #[test]
    fn api_error_is_reported_without_extra_prefix() {
        let response = ChatResponse::from_outcome(Err(RelayError::Provider(
            ProviderError::ApiError("Gemini API error 503 Service Unavailable: overloaded".to_string()),
        )));
        assert_eq!(
            response.response,
            "Error: Gemini API error 503 Service Unavailable: overloaded"
        );
    }

    #[test]
    fn request_requires_message_field() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"text":"hi"}"#).is_err());
        let request: ChatRequest = serde_json::from_str(r#"{"message":""}"#).unwrap();
        assert_eq!(request.message, "");
    }
}
