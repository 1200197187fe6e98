use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::redirect::Policy;
use url::Url;

use business::domain::web::errors::WebError;
use business::domain::web::model::FetchedPage;
use business::domain::web::services::PageFetcherService;

use crate::html;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const MAX_REDIRECTS: usize = 10;

/// Downloads pages with a browser-like user agent, following redirects.
pub struct ReqwestPageFetcher {
    client: Client,
}

impl ReqwestPageFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

fn request_error(error: reqwest::Error) -> WebError {
    if error.is_timeout() {
        WebError::Timeout
    } else {
        WebError::RequestFailed(error.to_string())
    }
}

#[async_trait]
impl PageFetcherService for ReqwestPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, WebError> {
        let parsed = Url::parse(url).map_err(|e| WebError::RequestFailed(format!("{}: {}", url, e)))?;
        tracing::debug!(host = parsed.host_str().unwrap_or_default(), "Fetching page");

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(request_error)?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        if status_code >= 400 {
            return Ok(FetchedPage {
                final_url,
                status_code,
                ..Default::default()
            });
        }

        let body = response.text().await.map_err(request_error)?;
        let content = html::extract(&body);

        Ok(FetchedPage {
            final_url,
            status_code,
            title: content.title,
            text: content.text,
        })
    }
}
