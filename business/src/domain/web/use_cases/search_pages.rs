use async_trait::async_trait;

use crate::domain::annotation::model::AnnotationRecord;
use crate::domain::inspection::model::InspectionRow;

pub struct SearchWebPagesParams {
    pub row: InspectionRow,
    pub row_index: usize,
}

/// Raw search result text plus the annotations extracted on the way.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub pages: String,
    pub record: AnnotationRecord,
}

/// Never fails: a failed search degrades to the curated fallback pages.
#[async_trait]
pub trait SearchWebPagesUseCase: Send + Sync {
    async fn execute(&self, params: SearchWebPagesParams) -> SearchOutcome;
}
