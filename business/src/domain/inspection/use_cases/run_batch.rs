use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::inspection::errors::InspectionError;

pub struct RunBatchParams {
    /// Stop after this many rows with a topic have been processed.
    pub max_rows: Option<usize>,
    pub cancel: CancellationToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Completed { processed: usize, output: String },
    Interrupted { processed: usize },
}

#[async_trait]
pub trait RunBatchUseCase: Send + Sync {
    async fn execute(&self, params: RunBatchParams) -> Result<BatchOutcome, InspectionError>;
}
