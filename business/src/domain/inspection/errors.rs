use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum InspectionError {
    #[error("inspection.input_empty")]
    InputEmpty,
    #[error("inspection.network: {0}")]
    Network(String),
    #[error("inspection.prompt_unavailable: {0}")]
    PromptUnavailable(String),
    #[error("inspection.processing_failed: {0}")]
    ProcessingFailed(String),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
