use async_trait::async_trait;

use crate::domain::annotation::model::AnnotationRecord;
use crate::domain::inspection::model::InspectionRow;
use crate::domain::web::model::ValidationOutcome;

pub struct ValidateUrlsParams {
    pub pages: String,
    pub row: InspectionRow,
    pub record: AnnotationRecord,
}

/// Never fails: unreachable pages are recorded in the report and skipped.
#[async_trait]
pub trait ValidateUrlsUseCase: Send + Sync {
    async fn execute(&self, params: ValidateUrlsParams) -> ValidationOutcome;
}
