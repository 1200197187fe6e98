use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;

use business::domain::annotation::model::{
    AnnotationDocument, AnnotationDocumentEntry, AnnotationRecord,
};
use business::domain::annotation::repository::AnnotationRepository;
use business::domain::errors::RepositoryError;

use crate::files::{read_optional, write_file};

// Only the per-row entries are needed to seed the catalogue; the totals are recomputed.
#[derive(Deserialize)]
struct StoredDocument {
    #[serde(default)]
    rules: Vec<AnnotationDocumentEntry>,
}

pub struct JsonAnnotationRepository {
    path: PathBuf,
}

impl JsonAnnotationRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl AnnotationRepository for JsonAnnotationRepository {
    async fn load(&self) -> Result<Vec<AnnotationRecord>, RepositoryError> {
        let Some(bytes) = read_optional(&self.path).await? else {
            return Ok(Vec::new());
        };

        let stored: StoredDocument =
            serde_json::from_slice(&bytes).map_err(RepositoryError::malformed)?;
        Ok(stored.rules.into_iter().map(AnnotationRecord::from).collect())
    }

    async fn save(&self, document: &AnnotationDocument) -> Result<String, RepositoryError> {
        let json = serde_json::to_vec_pretty(document).map_err(RepositoryError::write_failed)?;
        let location = write_file(&self.path, &json).await?;
        tracing::debug!(records = document.rules.len(), path = %location, "Saved annotations");
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::annotation::catalog::AnnotationCatalog;
    use business::domain::inspection::model::InspectionRow;

    #[tokio::test]
    async fn should_start_empty_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonAnnotationRepository::new(dir.path().join("extracted_annotations.json"));

        assert!(repository.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reload_what_was_saved() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonAnnotationRepository::new(dir.path().join("extracted_annotations.json"));

        let catalog = AnnotationCatalog::new();
        catalog.extract_and_store(
            7,
            &InspectionRow {
                framework: "JPA".to_string(),
                topic: "Missing @javax.persistence.Id".to_string(),
                ..Default::default()
            },
        );
        repository.save(&catalog.document()).await.unwrap();

        let raw: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("extracted_annotations.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(raw["rules"][0]["row_index_from_the_input_file"], 7);
        assert!(raw["rules"][0]["keywords_other_than_@annotation_from_topic"].is_object());

        let records = repository.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].row_index, 7);
        assert_eq!(
            records[0].annotations.all,
            vec!["@javax.persistence.Id", "@Id"]
        );
    }

    #[tokio::test]
    async fn should_reject_broken_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extracted_annotations.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonAnnotationRepository::new(path).load().await;
        assert!(matches!(result, Err(RepositoryError::Malformed(_))));
    }
}
