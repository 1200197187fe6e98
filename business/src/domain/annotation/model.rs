use serde::{Deserialize, Serialize};

/// Annotations found in one inspection row, split by the field they came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSets {
    #[serde(default)]
    pub all: Vec<String>,
    #[serde(default)]
    pub from_topic: Vec<String>,
    #[serde(default)]
    pub from_issue_description: Vec<String>,
    #[serde(default)]
    pub from_examples: Vec<String>,
}

/// Keywords (other than annotations) found in one inspection row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSets {
    #[serde(default)]
    pub from_the_name_of_framework: Vec<String>,
    #[serde(default)]
    pub from_topic: Vec<String>,
    #[serde(default)]
    pub from_issue_description: Vec<String>,
}

impl KeywordSets {
    pub fn iter_all(&self) -> impl Iterator<Item = &String> {
        self.from_the_name_of_framework
            .iter()
            .chain(self.from_topic.iter())
            .chain(self.from_issue_description.iter())
    }
}

/// Everything extracted from a single row of the inspection sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationRecord {
    pub row_index: usize,
    pub framework: String,
    pub topic: String,
    pub description: String,
    pub annotations: AnnotationSets,
    pub keywords: KeywordSets,
}

impl AnnotationRecord {
    pub fn annotation_count(&self) -> usize {
        self.annotations.all.len()
    }
}

/// Persisted shape of a single record inside [`AnnotationDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDocumentEntry {
    pub row_index_from_the_input_file: usize,
    #[serde(default)]
    pub annotations: AnnotationSets,
    #[serde(rename = "keywords_other_than_@annotation_from_topic", default)]
    pub keywords: KeywordSets,
}

/// The annotation catalogue as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDocument {
    pub total_number_keywords_including_unique_annotations: usize,
    pub all_unique_annotations: Vec<String>,
    pub rules: Vec<AnnotationDocumentEntry>,
}

impl From<AnnotationDocumentEntry> for AnnotationRecord {
    fn from(entry: AnnotationDocumentEntry) -> Self {
        Self {
            row_index: entry.row_index_from_the_input_file,
            annotations: entry.annotations,
            keywords: entry.keywords,
            ..Default::default()
        }
    }
}
