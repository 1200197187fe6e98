use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use business::domain::web::errors::WebError;
use business::domain::web::services::{SearchRequest, WebSearchService};

use crate::client::{ClientError, OpenAIClient};

/// Finds documentation pages with the Responses API `web_search` tool.
pub struct WebSearcherOpenAI {
    client: Arc<OpenAIClient>,
    model: String,
}

impl WebSearcherOpenAI {
    pub fn new(client: Arc<OpenAIClient>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    pub fn build_prompt(request: &SearchRequest) -> String {
        let queries = request
            .queries
            .iter()
            .enumerate()
            .map(|(index, query)| format!("{}. {}", index + 1, query))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"Search the web for the most relevant documentation pages for this Java framework issue.

=== ISSUE ===
Framework: {}
Topic: {}
Description: {}
Annotations to find: {}

=== SEARCH QUERIES ===
{}

=== REQUIREMENTS ===
1. Find 3-5 relevant pages (the top {} will be kept after validation)
2. EXCLUDE all JetBrains URLs
3. PRIORITIZE: Official docs > Baeldung > Stack Overflow

Return URLs with brief descriptions."#,
            request.row.framework,
            request.row.topic,
            request.row.description,
            request.annotations.join(", "),
            queries,
            request.pages_kept
        )
    }
}

#[async_trait]
impl WebSearchService for WebSearcherOpenAI {
    async fn search(&self, request: &SearchRequest) -> Result<String, WebError> {
        let body = json!({
            "model": self.model,
            "tools": [{"type": "web_search"}],
            "input": Self::build_prompt(request),
        });

        tracing::debug!(model = %self.model, queries = request.queries.len(), "Running web search");
        search_output(self.client.respond(&body).await)
    }
}

// A search that answered with no text found no pages.
fn search_output(result: Result<String, ClientError>) -> Result<String, WebError> {
    match result {
        Ok(text) => Ok(text),
        Err(ClientError::EmptyOutput) => Ok(String::new()),
        Err(e) => Err(WebError::SearchFailed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::inspection::model::InspectionRow;

    #[test]
    fn should_number_queries_and_list_annotations() {
        let request = SearchRequest {
            row: InspectionRow {
                framework: "CDI".to_string(),
                topic: "Ambiguous @Inject".to_string(),
                ..Default::default()
            },
            annotations: vec!["@Inject".to_string(), "@Named".to_string()],
            queries: vec!["@Inject AND cdi".to_string(), "cdi ambiguous".to_string()],
            pages_kept: 2,
        };

        let prompt = WebSearcherOpenAI::build_prompt(&request);

        assert!(prompt.contains("Annotations to find: @Inject, @Named"));
        assert!(prompt.contains("1. @Inject AND cdi\n2. cdi ambiguous"));
        assert!(prompt.contains("the top 2 will be kept"));
    }

    #[test]
    fn should_treat_empty_search_output_as_no_results() {
        assert_eq!(search_output(Err(ClientError::EmptyOutput)).unwrap(), "");
        assert_eq!(
            search_output(Ok("https://docs.jboss.org".into())).unwrap(),
            "https://docs.jboss.org"
        );
        assert!(matches!(
            search_output(Err(ClientError::Status(429, "slow down".into()))),
            Err(WebError::SearchFailed(_))
        ));
    }
}
