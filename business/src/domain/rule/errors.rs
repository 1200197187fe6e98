#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The model endpoint could not be reached at all (connection refused, DNS, timeout).
    #[error("rule.service_unreachable: {0}")]
    Unreachable(String),
    #[error("rule.request_failed: {0}")]
    RequestFailed(String),
    #[error("rule.empty_response")]
    EmptyResponse,
}

impl RuleError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, RuleError::Unreachable(_))
    }
}
