use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use business::domain::web::errors::WebError;
use business::domain::web::model::{truncate_chars, RelevanceVerdict};
use business::domain::web::services::{RelevanceJudgeService, RelevanceRequest};

use crate::client::{ModelSettings, OpenAIClient};

const PROMPT_EXCERPT_CHARS: usize = 1200;

static OPENING_FENCE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^```(?:json)?\s*").ok());
static CLOSING_FENCE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\s*```$").ok());

/// Asks a model whether a fetched page is about the inspection at hand.
pub struct RelevanceJudgeOpenAI {
    client: Arc<OpenAIClient>,
    settings: ModelSettings,
}

impl RelevanceJudgeOpenAI {
    pub fn new(client: Arc<OpenAIClient>, settings: ModelSettings) -> Self {
        Self { client, settings }
    }

    pub fn build_prompt(request: &RelevanceRequest) -> String {
        let annotations = if request.annotations.is_empty() {
            "None found".to_string()
        } else {
            request.annotations.join(", ")
        };

        format!(
            r#"Analyze if this web page is relevant to the Java framework issue.

=== ISSUE ===
Framework: {framework}
Topic: {topic}
Required Annotations: {annotations}

=== WEB PAGE ===
URL: {url}
Title: {title}

Content:
{excerpt}

=== CRITERIA ===
1. Does it discuss {framework}?
2. Does it mention annotations: {annotations}?
3. Is it technical documentation or a tutorial?
4. Is it relevant to "{topic}"?

Respond with JSON only:
{{"is_relevant": true/false, "confidence": "high/medium/low", "reason": "one sentence", "annotations_discussed": ["@Anno1"]}}"#,
            framework = request.framework,
            topic = request.topic,
            annotations = annotations,
            url = request.url,
            title = request.title,
            excerpt = truncate_chars(&request.excerpt, PROMPT_EXCERPT_CHARS),
        )
    }

    /// Parses the model's answer, tolerating a surrounding markdown fence.
    pub fn parse_verdict(text: &str) -> Result<RelevanceVerdict, WebError> {
        let mut json_text = text.trim().to_string();
        if let Some(fence) = OPENING_FENCE.as_ref() {
            json_text = fence.replace(&json_text, "").to_string();
        }
        if let Some(fence) = CLOSING_FENCE.as_ref() {
            json_text = fence.replace(&json_text, "").to_string();
        }

        serde_json::from_str(&json_text).map_err(|e| WebError::JudgeFailed(e.to_string()))
    }
}

#[async_trait]
impl RelevanceJudgeService for RelevanceJudgeOpenAI {
    async fn judge(&self, request: &RelevanceRequest) -> Result<RelevanceVerdict, WebError> {
        let body = self.settings.body(
            json!([
                {"role": "system", "content": "Validate web page relevance. JSON only."},
                {"role": "developer", "content": Self::build_prompt(request)},
            ]),
            "",
        );

        let text = self
            .client
            .respond(&body)
            .await
            .map_err(|e| WebError::JudgeFailed(e.to_string()))?;

        Self::parse_verdict(&text)
    }
}
