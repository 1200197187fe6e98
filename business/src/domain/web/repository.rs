use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::UrlReport;

#[async_trait]
pub trait UrlReportRepository: Send + Sync {
    /// Stores the report under `file_name` and returns the full location.
    async fn save(&self, file_name: &str, report: &UrlReport) -> Result<String, RepositoryError>;
}
