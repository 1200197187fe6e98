use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{AnnotationDocument, AnnotationRecord};

/// Persistence port for the annotation catalogue.
#[async_trait]
pub trait AnnotationRepository: Send + Sync {
    /// Records saved by an earlier run, or an empty list when nothing was saved yet.
    async fn load(&self) -> Result<Vec<AnnotationRecord>, RepositoryError>;
    /// Writes the catalogue and returns where it went.
    async fn save(&self, document: &AnnotationDocument) -> Result<String, RepositoryError>;
}
