use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// Matches `@Entity` as well as qualified forms such as `@javax.persistence.Entity`.
static ANNOTATION_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"@(?:[\w.]+\.)?\w+").ok());

static NON_WORD: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\W+").ok());

const KEYWORD_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
    "can", "need", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as", "into",
    "through", "during", "before", "after", "above", "below", "between", "under", "that",
    "which", "who", "whom", "this", "these", "those", "reports", "errors", "error", "such",
    "inspection", "check", "checks", "report", "jetbrains", "issue", "problem", "detect",
    "detects",
];

/// Extracts every `@annotation` mentioned in `text`, in order of appearance.
///
/// A qualified annotation is followed by its short form, so `@javax.persistence.Entity`
/// yields both `@javax.persistence.Entity` and `@Entity`. Duplicates are dropped.
pub fn extract_annotations(text: &str) -> Vec<String> {
    let Some(pattern) = ANNOTATION_PATTERN.as_ref() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut annotations = Vec::new();

    for found in pattern.find_iter(text) {
        let annotation = found.as_str().to_string();
        let simple_name = annotation
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .trim_start_matches('@');
        let short_form = format!("@{}", simple_name);

        if seen.insert(annotation.clone()) {
            annotations.push(annotation.clone());
        }
        if short_form != annotation && seen.insert(short_form.clone()) {
            annotations.push(short_form);
        }
    }

    annotations
}

/// Extracts lower-cased keywords from `text`, skipping stop words, short words and numbers.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let Some(separator) = NON_WORD.as_ref() else {
        return Vec::new();
    };

    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();

    separator
        .split(&lowered)
        .filter(|word| !word.is_empty())
        .filter(|word| !KEYWORD_STOP_WORDS.contains(word))
        .filter(|word| word.chars().count() > 2)
        .filter(|word| !word.chars().all(|c| c.is_numeric()))
        .filter(|word| seen.insert(word.to_string()))
        .map(|word| word.to_string())
        .collect()
}

/// Concatenates the lists in order, keeping the first occurrence of every item.
pub fn merge_unique<'a, I>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for list in lists {
        for item in list {
            if seen.insert(item.as_str()) {
                merged.push(item.clone());
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_compile_patterns() {
        assert!(ANNOTATION_PATTERN.is_some());
        assert!(NON_WORD.is_some());
    }

    #[test]
    fn should_extract_simple_annotations_in_order() {
        let found = extract_annotations("Use @Entity together with @Id and @Entity again");
        assert_eq!(found, vec!["@Entity", "@Id"]);
    }

    #[test]
    fn should_add_short_form_after_qualified_annotation() {
        let found = extract_annotations("@javax.persistence.Entity class Foo");
        assert_eq!(found, vec!["@javax.persistence.Entity", "@Entity"]);
    }

    #[test]
    fn should_stop_annotation_at_parenthesis() {
        let found = extract_annotations(r#"@Column(name="id") private Long id;"#);
        assert_eq!(found, vec!["@Column"]);
    }

    #[test]
    fn should_not_duplicate_short_form_already_seen() {
        let found = extract_annotations("@Entity and @jakarta.persistence.Entity");
        assert_eq!(found, vec!["@Entity", "@jakarta.persistence.Entity"]);
    }

    #[test]
    fn should_return_nothing_for_text_without_annotations() {
        assert!(extract_annotations("").is_empty());
        assert!(extract_annotations("plain words only").is_empty());
    }

    #[test]
    fn should_extract_keywords_without_stop_words() {
        let keywords = extract_keywords("Reports the missing @Transactional on a Spring bean method");
        assert_eq!(
            keywords,
            vec!["missing", "transactional", "spring", "bean", "method"]
        );
    }

    #[test]
    fn should_skip_short_and_numeric_keywords() {
        let keywords = extract_keywords("JPA 2024 id of an entity v2");
        assert_eq!(keywords, vec!["jpa", "entity"]);
    }

    #[test]
    fn should_deduplicate_keywords() {
        let keywords = extract_keywords("Bean bean BEAN scope");
        assert_eq!(keywords, vec!["bean", "scope"]);
    }

    #[test]
    fn should_merge_lists_keeping_first_occurrence() {
        let first = vec!["@A".to_string(), "@B".to_string()];
        let second = vec!["@B".to_string(), "@C".to_string()];
        let merged = merge_unique([first.as_slice(), second.as_slice()]);
        assert_eq!(merged, vec!["@A", "@B", "@C"]);
    }

    proptest! {
        #[test]
        fn extracted_annotations_are_unique_and_prefixed(text in ".{0,200}") {
            let found = extract_annotations(&text);
            let unique: HashSet<_> = found.iter().collect();
            prop_assert_eq!(unique.len(), found.len());
            prop_assert!(found.iter().all(|a| a.starts_with('@')));
        }

        #[test]
        fn extracted_keywords_are_lowercase_and_long(text in "[A-Za-z0-9 ,.@]{0,200}") {
            for keyword in extract_keywords(&text) {
                prop_assert!(keyword.chars().count() > 2);
                prop_assert_eq!(keyword.to_lowercase(), keyword.clone());
                prop_assert!(!KEYWORD_STOP_WORDS.contains(&keyword.as_str()));
            }
        }
    }
}
