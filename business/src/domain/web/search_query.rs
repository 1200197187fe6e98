use crate::domain::annotation::extractor::merge_unique;
use crate::domain::annotation::model::AnnotationRecord;

/// Builds web search queries for a row: annotation-centred queries first,
/// then a keyword-only query, then annotation plus keyword combinations.
pub fn build_search_candidates(record: &AnnotationRecord) -> Vec<String> {
    let keywords = merge_unique([
        record.keywords.from_the_name_of_framework.as_slice(),
        record.keywords.from_topic.as_slice(),
        record.keywords.from_issue_description.as_slice(),
    ]);

    let top_two = keywords.iter().take(2).cloned().collect::<Vec<_>>().join(" ");
    let top_four = keywords.iter().take(4).cloned().collect::<Vec<_>>().join(" ");
    let annotations = &record.annotations.all;

    let mut candidates: Vec<String> = annotations
        .iter()
        .map(|annotation| {
            if top_two.is_empty() {
                annotation.clone()
            } else {
                format!("{} AND {}", annotation, top_two)
            }
        })
        .collect();

    if !top_four.is_empty() {
        candidates.push(top_four.clone());
        candidates.extend(
            annotations
                .iter()
                .map(|annotation| format!("{} {}", annotation, top_four)),
        );
    }

    if candidates.is_empty() {
        candidates.push(format!("{} {}", record.framework, record.topic).trim().to_string());
    }

    candidates
}
