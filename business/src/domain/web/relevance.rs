use serde::Serialize;

use crate::domain::inspection::model::InspectionRow;

const ANNOTATION_WEIGHT: f64 = 4.0;
const FRAMEWORK_WEIGHT: f64 = 3.0;
const PARTIAL_FRAMEWORK_FACTOR: f64 = 0.6;
const TOPIC_WORD_WEIGHT: f64 = 1.5;
const MAX_TOPIC_WORDS: usize = 6;
const FRAMEWORK_TITLE_BONUS: f64 = 0.20;
const ANNOTATION_TITLE_BONUS: f64 = 0.15;
const MAX_TITLE_ANNOTATION_BONUSES: usize = 2;
const TITLE_ANNOTATION_CANDIDATES: usize = 5;

const TOPIC_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "in", "of", "to", "for", "on", "with", "that", "this", "be",
    "as", "by", "or", "and", "use", "using", "used", "reports", "error", "errors", "incorrect",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationMatch {
    pub annotation: String,
    pub found: bool,
    pub locations: Vec<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreDetails {
    pub annotation_matches: Vec<AnnotationMatch>,
    pub framework_match: f64,
    pub topic_matches: Vec<(String, bool)>,
    pub title_bonuses: Vec<String>,
    pub total_weight: f64,
    pub earned_weight: f64,
}

impl ScoreDetails {
    pub fn annotations_found(&self) -> usize {
        self.annotation_matches.iter().filter(|m| m.found).count()
    }
}

/// Scores how relevant a page is to an inspection row, from 0.0 to 1.0.
///
/// Annotations weigh the most, then the framework name, then topic words. The page
/// title earns bonuses proportional to the total weight, so the score is capped at 1.0.
pub fn score_relevance(
    page_text: &str,
    page_title: &str,
    row: &InspectionRow,
    annotations: &[String],
) -> (f64, ScoreDetails) {
    let text = page_text.to_lowercase();
    let title = page_title.to_lowercase();
    let mut details = ScoreDetails::default();
    let mut total = 0.0;
    let mut earned = 0.0;

    for annotation in annotations {
        total += ANNOTATION_WEIGHT;
        let with_at = annotation.to_lowercase();
        let bare = annotation.trim_start_matches('@').to_lowercase();

        let mut locations = Vec::new();
        if text.contains(&with_at) {
            locations.push("text_exact");
        }
        if text.contains(&bare) {
            locations.push("text_without_at");
        }
        if title.contains(&with_at) || title.contains(&bare) {
            locations.push("title");
        }

        let found = !locations.is_empty();
        if found {
            earned += ANNOTATION_WEIGHT;
        }
        details.annotation_matches.push(AnnotationMatch {
            annotation: annotation.clone(),
            found,
            locations,
        });
    }

    let framework = row.framework.trim().to_lowercase();
    total += FRAMEWORK_WEIGHT;
    if text.contains(&framework) {
        earned += FRAMEWORK_WEIGHT;
        details.framework_match = 1.0;
    } else if framework
        .split_whitespace()
        .filter(|part| part.chars().count() > 2)
        .any(|part| text.contains(part))
    {
        earned += FRAMEWORK_WEIGHT * PARTIAL_FRAMEWORK_FACTOR;
        details.framework_match = PARTIAL_FRAMEWORK_FACTOR;
    }

    for word in topic_words(&row.topic).into_iter().take(MAX_TOPIC_WORDS) {
        total += TOPIC_WORD_WEIGHT;
        let matched = text.contains(&word);
        if matched {
            earned += TOPIC_WORD_WEIGHT;
        }
        details.topic_matches.push((word, matched));
    }

    if title.contains(&framework) {
        earned += FRAMEWORK_TITLE_BONUS * total;
        details.title_bonuses.push("framework_in_title".to_string());
    }

    let mut title_bonuses = 0;
    for annotation in annotations.iter().take(TITLE_ANNOTATION_CANDIDATES) {
        if title_bonuses == MAX_TITLE_ANNOTATION_BONUSES {
            break;
        }
        let with_at = annotation.to_lowercase();
        let bare = annotation.trim_start_matches('@').to_lowercase();
        if title.contains(&with_at) || title.contains(&bare) {
            earned += ANNOTATION_TITLE_BONUS * total;
            details
                .title_bonuses
                .push(format!("annotation_in_title:{}", annotation));
            title_bonuses += 1;
        }
    }

    details.total_weight = total;
    details.earned_weight = earned;

    let score = (earned / f64::max(total, 1.0)).min(1.0);
    (score, details)
}

// Topic words keep duplicates; the first six count.
fn topic_words(topic: &str) -> Vec<String> {
    let lowered = topic.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .filter(|w| !TOPIC_STOP_WORDS.contains(w))
        .filter(|w| w.chars().count() > 2)
        .map(|w| w.to_string())
        .collect()
}
