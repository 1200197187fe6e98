use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::web::model::UrlReport;
use business::domain::web::repository::UrlReportRepository;

use crate::files::write_file;

/// Writes one pretty-printed JSON report per row into a directory.
pub struct FsUrlReportRepository {
    directory: PathBuf,
}

impl FsUrlReportRepository {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl UrlReportRepository for FsUrlReportRepository {
    async fn save(&self, file_name: &str, report: &UrlReport) -> Result<String, RepositoryError> {
        let json = serde_json::to_vec_pretty(report).map_err(RepositoryError::write_failed)?;
        write_file(&self.directory.join(file_name), &json).await
    }
}
