use std::path::Path;
use std::time::Duration;

use crate::cli::Cli;

/// Configuration for OpenAI API access.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub rule_model: String,
    pub search_model: String,
    pub evaluation_model: String,
    pub relevance_model: String,
    pub reasoning_effort: String,
    pub request_timeout: Duration,
}

impl OpenAIConfig {
    /// Build from flags, resolving the API key from `OPENAI_API_KEY` or the key file.
    pub fn from_cli(cli: &Cli, key_file: &Path) -> Self {
        let api_key = resolve_api_key(std::env::var("OPENAI_API_KEY").ok(), key_file);
        Self {
            api_key,
            base_url: cli.openai_base_url.clone(),
            rule_model: cli.rule_model.clone(),
            search_model: cli.search_model.clone(),
            evaluation_model: cli.evaluation_model.clone(),
            relevance_model: cli.relevance_model.clone(),
            reasoning_effort: cli.reasoning_effort.clone(),
            request_timeout: Duration::from_secs(cli.request_timeout_secs),
        }
    }
}

/// The environment value wins; otherwise the trimmed contents of `key_file`.
/// Blank values count as missing.
pub fn resolve_api_key(from_env: Option<String>, key_file: &Path) -> Option<String> {
    let non_blank = |value: String| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    from_env.and_then(non_blank).or_else(|| {
        std::fs::read_to_string(key_file)
            .ok()
            .and_then(non_blank)
    })
}
