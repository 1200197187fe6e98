use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{InspectionSheet, SaveSlot};

#[async_trait]
pub trait InspectionRepository: Send + Sync {
    async fn load(&self) -> Result<InspectionSheet, RepositoryError>;
    /// Writes a snapshot of the output sheet and returns the location written.
    async fn save(&self, sheet: &InspectionSheet, slot: SaveSlot) -> Result<String, RepositoryError>;
}
