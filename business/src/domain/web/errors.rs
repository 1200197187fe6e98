#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("web.timeout")]
    Timeout,
    #[error("web.request_failed: {0}")]
    RequestFailed(String),
    #[error("web.search_failed: {0}")]
    SearchFailed(String),
    #[error("web.judge_failed: {0}")]
    JudgeFailed(String),
}
