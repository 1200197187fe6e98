use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

use crate::domain::inspection::model::InspectionRow;

use super::extractor::{extract_annotations, extract_keywords, merge_unique};
use super::model::{
    AnnotationDocument, AnnotationDocumentEntry, AnnotationRecord, AnnotationSets, KeywordSets,
};

/// Annotations and keywords extracted so far, keyed by input row index.
#[derive(Debug, Default)]
pub struct AnnotationCatalog {
    records: Mutex<BTreeMap<usize, AnnotationRecord>>,
}

impl AnnotationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the catalogue with records loaded from a previous run.
    pub fn with_records(records: Vec<AnnotationRecord>) -> Self {
        let records = records.into_iter().map(|r| (r.row_index, r)).collect();
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<usize, AnnotationRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Extracts annotations and keywords from every field of `row` and stores the record,
    /// replacing any earlier record for the same index.
    pub fn extract_and_store(&self, row_index: usize, row: &InspectionRow) -> AnnotationRecord {
        let from_topic = extract_annotations(&row.topic);
        let from_issue_description = extract_annotations(&row.description);
        let from_examples = if row.examples.is_empty() {
            Vec::new()
        } else {
            extract_annotations(&row.examples)
        };

        let all = merge_unique([
            from_topic.as_slice(),
            from_issue_description.as_slice(),
            from_examples.as_slice(),
        ]);

        let record = AnnotationRecord {
            row_index,
            framework: row.framework.clone(),
            topic: row.topic.clone(),
            description: row.description.clone(),
            annotations: AnnotationSets {
                all,
                from_topic,
                from_issue_description,
                from_examples,
            },
            keywords: KeywordSets {
                from_the_name_of_framework: extract_keywords(&row.framework),
                from_topic: extract_keywords(&row.topic),
                from_issue_description: extract_keywords(&row.description),
            },
        };

        self.lock().insert(row_index, record.clone());
        record
    }

    pub fn annotations_for_row(&self, row_index: usize) -> Vec<String> {
        self.lock()
            .get(&row_index)
            .map(|r| r.annotations.all.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Builds the persisted view: every record by row index plus the sorted union of
    /// all annotations and keywords.
    pub fn document(&self) -> AnnotationDocument {
        let records = self.lock();

        let unique: BTreeSet<String> = records
            .values()
            .flat_map(|r| r.annotations.all.iter().chain(r.keywords.iter_all()))
            .cloned()
            .collect();

        AnnotationDocument {
            total_number_keywords_including_unique_annotations: unique.len(),
            all_unique_annotations: unique.into_iter().collect(),
            rules: records
                .values()
                .map(|r| AnnotationDocumentEntry {
                    row_index_from_the_input_file: r.row_index,
                    annotations: r.annotations.clone(),
                    keywords: r.keywords.clone(),
                })
                .collect(),
        }
    }
}
