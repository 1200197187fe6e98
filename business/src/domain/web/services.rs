use async_trait::async_trait;

use crate::domain::inspection::model::InspectionRow;

use super::errors::WebError;
use super::model::{FetchedPage, RelevanceVerdict};

/// What the search engine is asked to find for one row.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub row: InspectionRow,
    pub annotations: Vec<String>,
    pub queries: Vec<String>,
    /// How many pages will survive validation; the search is asked for a few more.
    pub pages_kept: usize,
}

/// A page excerpt submitted to the relevance judge.
#[derive(Debug, Clone)]
pub struct RelevanceRequest {
    pub url: String,
    pub title: String,
    pub excerpt: String,
    pub framework: String,
    pub topic: String,
    pub annotations: Vec<String>,
}

/// Service port for finding third-party documentation on the web.
/// Returns free text listing URLs with short descriptions.
#[async_trait]
pub trait WebSearchService: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<String, WebError>;
}

/// Service port for downloading a page and reducing it to text.
#[async_trait]
pub trait PageFetcherService: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, WebError>;
}

/// Service port for asking a model whether a page is relevant.
#[async_trait]
pub trait RelevanceJudgeService: Send + Sync {
    async fn judge(&self, request: &RelevanceRequest) -> Result<RelevanceVerdict, WebError>;
}
