use async_trait::async_trait;

use crate::domain::inspection::errors::InspectionError;
use crate::domain::inspection::model::{GeneratedContent, InspectionRow};

pub struct ProcessRowParams {
    pub row: InspectionRow,
    pub row_index: usize,
}

#[async_trait]
pub trait ProcessRowUseCase: Send + Sync {
    async fn execute(&self, params: ProcessRowParams) -> Result<GeneratedContent, InspectionError>;
}
