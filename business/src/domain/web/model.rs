use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static UNSAFE_FILE_CHARS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^\w\-]").ok());

/// A downloaded page, already reduced to readable text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedPage {
    pub final_url: String,
    pub status_code: u16,
    pub title: String,
    pub text: String,
}

/// The LLM's opinion on whether a page is relevant to an inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceVerdict {
    #[serde(default)]
    pub is_relevant: bool,
    #[serde(default = "RelevanceVerdict::default_confidence")]
    pub confidence: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations_discussed: Vec<String>,
}

impl RelevanceVerdict {
    fn default_confidence() -> String {
        "low".to_string()
    }

    /// Verdict recorded when the judge could not be asked.
    pub fn failed(cause: &str) -> Self {
        Self {
            is_relevant: false,
            confidence: Self::default_confidence(),
            reason: format!("Error: {}", truncate_chars(cause, 50)),
            annotations_discussed: Vec::new(),
        }
    }
}

/// Tunables for URL validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSettings {
    pub max_urls: usize,
    pub min_relevance: f64,
    pub use_llm: bool,
    /// Scores inside this range are sent to the LLM judge.
    pub borderline: RangeInclusive<f64>,
    pub relevant_floor: f64,
    pub irrelevant_ceiling: f64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            max_urls: 2,
            min_relevance: 0.30,
            use_llm: true,
            borderline: 0.25..=0.55,
            relevant_floor: 0.60,
            irrelevant_ceiling: 0.25,
        }
    }
}

/// One entry of the per-row URL validation report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UrlCheck {
    Skipped {
        url: String,
        status: String,
        reason: String,
    },
    HttpError {
        url: String,
        status_code: u16,
        is_valid: bool,
        error: String,
    },
    Fetched {
        url: String,
        final_url: String,
        status_code: u16,
        page_title: Option<String>,
        is_valid: bool,
        relevance_score: f64,
        annotations_found: usize,
        llm_validation: Option<RelevanceVerdict>,
    },
    Failed {
        url: String,
        is_valid: bool,
        error: String,
    },
}

impl UrlCheck {
    pub fn skipped(url: &str) -> Self {
        UrlCheck::Skipped {
            url: url.to_string(),
            status: "skipped".to_string(),
            reason: "JetBrains domain".to_string(),
        }
    }

    pub fn http_error(url: &str, status_code: u16) -> Self {
        UrlCheck::HttpError {
            url: url.to_string(),
            status_code,
            is_valid: false,
            error: format!("HTTP {}", status_code),
        }
    }

    pub fn failed(url: &str, error: &str) -> Self {
        UrlCheck::Failed {
            url: url.to_string(),
            is_valid: false,
            error: truncate_chars(error, 100),
        }
    }
}

/// A page that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUrl {
    pub url: String,
    pub title: String,
    pub relevance_score: f64,
    pub annotations_found: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlReportMetadata {
    pub saved_at: String,
    pub report_file: String,
    pub framework: String,
    pub topic: String,
    pub total_urls_checked: usize,
    pub urls_passed: usize,
    pub urls_failed: usize,
}

/// Everything checked for one row, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlReport {
    #[serde(rename = "_metadata")]
    pub metadata: UrlReportMetadata,
    pub url_validations: Vec<UrlCheck>,
}

/// Result of validating the URLs of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub summary: String,
    pub checks: Vec<UrlCheck>,
}

pub const NO_VERIFIED_URLS: &str = "No relevant 3rd-party URLs could be verified.";

/// `url_report_<framework>_<topic>.json`, both parts sanitised for the file system.
pub fn report_file_name(framework: &str, topic: &str) -> String {
    format!(
        "url_report_{}_{}.json",
        sanitize(framework, 30),
        sanitize(topic, 50)
    )
}

fn sanitize(text: &str, max_chars: usize) -> String {
    let lowered = text.to_lowercase();
    let replaced = match UNSAFE_FILE_CHARS.as_ref() {
        Some(pattern) => pattern.replace_all(&lowered, "_").to_string(),
        None => lowered,
    };
    truncate_chars(&replaced, max_chars)
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Rounds to `decimals` places the way the reports display scores.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compile_patterns() {
        assert!(UNSAFE_FILE_CHARS.is_some());
    }

    #[test]
    fn should_build_safe_report_file_name() {
        let name = report_file_name("Spring Boot", "Missing @Autowired on constructor!");
        assert_eq!(
            name,
            "url_report_spring_boot_missing__autowired_on_constructor_.json"
        );
    }

    #[test]
    fn should_truncate_long_name_parts() {
        let name = report_file_name(&"f".repeat(40), &"t".repeat(80));
        assert_eq!(
            name,
            format!("url_report_{}_{}.json", "f".repeat(30), "t".repeat(50))
        );
    }

    #[test]
    fn should_serialize_checks_without_tags() {
        let json = serde_json::to_value(UrlCheck::skipped("https://jetbrains.com")).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["reason"], "JetBrains domain");

        let json = serde_json::to_value(UrlCheck::http_error("https://x.org", 404)).unwrap();
        assert_eq!(json["error"], "HTTP 404");
        assert_eq!(json["is_valid"], false);
    }

    #[test]
    fn should_truncate_failure_messages() {
        let check = UrlCheck::failed("https://x.org", &"e".repeat(300));
        match check {
            UrlCheck::Failed { error, .. } => assert_eq!(error.len(), 100),
            _ => panic!("expected failed check"),
        }
    }

    #[test]
    fn should_parse_partial_verdict() {
        let verdict: RelevanceVerdict = serde_json::from_str(r#"{"is_relevant": true}"#).unwrap();
        assert!(verdict.is_relevant);
        assert_eq!(verdict.confidence, "low");
    }

    #[test]
    fn should_round_scores() {
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(0.6667, 2), 0.67);
    }
}
