use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};

use business::domain::rule::errors::RuleError;

/// Failure talking to the Responses API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("openai.unreachable: {0}")]
    Unreachable(String),
    #[error("openai.status_{0}: {1}")]
    Status(u16, String),
    #[error("openai.decode_failed: {0}")]
    Decode(String),
    #[error("openai.empty_output")]
    EmptyOutput,
}

impl From<ClientError> for RuleError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Unreachable(cause) => RuleError::Unreachable(cause),
            ClientError::EmptyOutput => RuleError::EmptyResponse,
            other => RuleError::RequestFailed(other.to_string()),
        }
    }
}

/// Model, reasoning effort and verbosity for one kind of request.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub model: String,
    pub reasoning_effort: String,
    pub verbosity: String,
}

impl ModelSettings {
    pub fn new(model: &str, reasoning_effort: &str, verbosity: &str) -> Self {
        Self {
            model: model.to_string(),
            reasoning_effort: reasoning_effort.to_string(),
            verbosity: verbosity.to_string(),
        }
    }

    /// Request body with reasoning and verbosity set. `instructions` is left out when empty.
    pub fn body(&self, input: Value, instructions: &str) -> Value {
        let mut body = json!({
            "model": self.model,
            "input": input,
            "reasoning": {"effort": self.reasoning_effort},
            "text": {"verbosity": self.verbosity},
        });
        if !instructions.is_empty() {
            body["instructions"] = Value::String(instructions.to_string());
        }
        body
    }
}

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the responses endpoint URL.
    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    /// Posts `body` to the Responses API and returns the trimmed output text.
    pub async fn respond(&self, body: &Value) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.responses_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::Unreachable(e.to_string())
                } else {
                    ClientError::Status(0, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Responses API call failed");
            return Err(ClientError::Status(
                status.as_u16(),
                detail.chars().take(200).collect(),
            ));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        output_text(&data).ok_or(ClientError::EmptyOutput)
    }
}

/// Concatenates every `output_text` part of every `message` output item.
/// Returns `None` when there is no text at all.
pub fn output_text(data: &Value) -> Option<String> {
    let text = data["output"]
        .as_array()?
        .iter()
        .filter(|item| item["type"] == "message")
        .filter_map(|item| item["content"].as_array())
        .flatten()
        .filter(|part| part["type"] == "output_text")
        .filter_map(|part| part["text"].as_str())
        .collect::<Vec<_>>()
        .join("");

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_output_text_of_message_items() {
        let data = json!({
            "output": [
                {"type": "reasoning", "summary": []},
                {"type": "web_search_call", "status": "completed"},
                {"type": "message", "content": [
                    {"type": "output_text", "text": "rule A "},
                    {"type": "output_text", "text": "{ }\n"}
                ]}
            ]
        });

        assert_eq!(output_text(&data).as_deref(), Some("rule A { }"));
    }

    #[test]
    fn should_return_none_without_text() {
        assert_eq!(output_text(&json!({"output": []})), None);
        assert_eq!(output_text(&json!({"error": "bad"})), None);
    }

    #[test]
    fn should_build_body_with_reasoning_and_verbosity() {
        let settings = ModelSettings::new("gpt-5", "high", "low");
        let body = settings.body(json!("hello"), "");

        assert_eq!(body["model"], "gpt-5");
        assert_eq!(body["reasoning"]["effort"], "high");
        assert_eq!(body["text"]["verbosity"], "low");
        assert!(body.get("instructions").is_none());

        let body = settings.body(json!("hello"), "be brief");
        assert_eq!(body["instructions"], "be brief");
    }

    #[test]
    fn should_map_client_errors_to_rule_errors() {
        assert!(RuleError::from(ClientError::Unreachable("dns".into())).is_unreachable());
        assert!(matches!(
            RuleError::from(ClientError::EmptyOutput),
            RuleError::EmptyResponse
        ));
        assert!(matches!(
            RuleError::from(ClientError::Status(500, "oops".into())),
            RuleError::RequestFailed(_)
        ));
    }

    #[test]
    fn should_trim_trailing_slash_from_base_url() {
        let client = OpenAIClient::new("k".into(), Duration::from_secs(1))
            .with_base_url("http://localhost:8080/v1/");
        assert_eq!(client.responses_url(), "http://localhost:8080/v1/responses");
        assert_eq!(client.auth_header(), "Bearer k");
    }
}
