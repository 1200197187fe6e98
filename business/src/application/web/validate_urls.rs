use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::web::errors::WebError;
use crate::domain::web::links::{extract_urls, is_excluded};
use crate::domain::web::model::{
    report_file_name, round_to, truncate_chars, RelevanceVerdict, UrlCheck, UrlReport,
    UrlReportMetadata, ValidatedUrl, ValidationOutcome, ValidationSettings, NO_VERIFIED_URLS,
};
use crate::domain::web::relevance::score_relevance;
use crate::domain::web::repository::UrlReportRepository;
use crate::domain::web::services::{PageFetcherService, RelevanceJudgeService, RelevanceRequest};
use crate::domain::web::use_cases::validate_urls::{ValidateUrlsParams, ValidateUrlsUseCase};

const JUDGE_EXCERPT_CHARS: usize = 1500;
const SUMMARY_TITLE_CHARS: usize = 100;

pub struct ValidateUrlsUseCaseImpl {
    pub fetcher: Arc<dyn PageFetcherService>,
    pub judge: Arc<dyn RelevanceJudgeService>,
    pub reports: Arc<dyn UrlReportRepository>,
    pub settings: ValidationSettings,
    pub logger: Arc<dyn Logger>,
}

impl ValidateUrlsUseCaseImpl {
    async fn check_url(
        &self,
        url: &str,
        params: &ValidateUrlsParams,
    ) -> (UrlCheck, Option<ValidatedUrl>) {
        if is_excluded(url) {
            self.logger.debug(&format!("Skipping vendor URL {}", url));
            return (UrlCheck::skipped(url), None);
        }

        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(WebError::Timeout) => {
                self.logger.warn(&format!("Timeout fetching {}", url));
                return (UrlCheck::failed(url, "Timeout"), None);
            }
            Err(error) => {
                self.logger.warn(&format!("Failed to fetch {}: {}", url, error));
                return (UrlCheck::failed(url, &error.to_string()), None);
            }
        };

        if page.status_code >= 400 {
            return (UrlCheck::http_error(url, page.status_code), None);
        }

        let annotations = &params.record.annotations.all;
        let (mut score, details) = score_relevance(&page.text, &page.title, &params.row, annotations);
        let mut verdict = None;

        if self.settings.use_llm && self.settings.borderline.contains(&score) {
            let request = RelevanceRequest {
                url: page.final_url.clone(),
                title: page.title.clone(),
                excerpt: truncate_chars(&page.text, JUDGE_EXCERPT_CHARS),
                framework: params.row.framework.clone(),
                topic: params.row.topic.clone(),
                annotations: annotations.clone(),
            };
            let judged = match self.judge.judge(&request).await {
                Ok(judged) => {
                    score = if judged.is_relevant {
                        score.max(self.settings.relevant_floor)
                    } else {
                        score.min(self.settings.irrelevant_ceiling)
                    };
                    judged
                }
                Err(error) => {
                    self.logger
                        .warn(&format!("Relevance judge failed for {}: {}", url, error));
                    // An unanswered judge counts as an irrelevant verdict.
                    score = score.min(self.settings.irrelevant_ceiling);
                    RelevanceVerdict::failed(&error.to_string())
                }
            };
            verdict = Some(judged);
        }

        let is_valid = score >= self.settings.min_relevance;
        let annotations_found = details.annotations_found();
        let check = UrlCheck::Fetched {
            url: url.to_string(),
            final_url: page.final_url.clone(),
            status_code: page.status_code,
            page_title: (!page.title.is_empty()).then(|| truncate_chars(&page.title, SUMMARY_TITLE_CHARS)),
            is_valid,
            relevance_score: round_to(score, 3),
            annotations_found,
            llm_validation: verdict,
        };

        let validated = is_valid.then(|| ValidatedUrl {
            url: page.final_url,
            title: page.title,
            relevance_score: score,
            annotations_found,
        });

        (check, validated)
    }

    fn summarize(&self, validated: &[ValidatedUrl], annotation_count: usize) -> String {
        if validated.is_empty() {
            return NO_VERIFIED_URLS.to_string();
        }

        validated
            .iter()
            .enumerate()
            .map(|(index, page)| {
                let title = if page.title.is_empty() {
                    "No title".to_string()
                } else {
                    truncate_chars(&page.title, SUMMARY_TITLE_CHARS)
                };
                format!(
                    "{}. {} - {} [{}/{} annos, {:.0}%]",
                    index + 1,
                    page.url,
                    title,
                    page.annotations_found,
                    annotation_count,
                    page.relevance_score * 100.0
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn save_report(
        &self,
        params: &ValidateUrlsParams,
        urls_checked: usize,
        urls_passed: usize,
        checks: &[UrlCheck],
    ) {
        let file_name = report_file_name(&params.row.framework, &params.row.topic);
        let report = UrlReport {
            metadata: UrlReportMetadata {
                saved_at: chrono::Local::now().to_rfc3339(),
                report_file: file_name.clone(),
                framework: params.row.framework.clone(),
                topic: params.row.topic.clone(),
                total_urls_checked: urls_checked,
                urls_passed,
                urls_failed: urls_checked.saturating_sub(urls_passed),
            },
            url_validations: checks.to_vec(),
        };

        match self.reports.save(&file_name, &report).await {
            Ok(location) => self.logger.debug(&format!("URL report saved to {}", location)),
            Err(error) => self
                .logger
                .warn(&format!("Could not save URL report {}: {}", file_name, error)),
        }
    }
}

#[async_trait]
impl ValidateUrlsUseCase for ValidateUrlsUseCaseImpl {
    async fn execute(&self, params: ValidateUrlsParams) -> ValidationOutcome {
        let urls = extract_urls(&params.pages);

        self.logger
            .info(&format!("Validating {} candidate URLs", urls.len()));

        let mut checks = Vec::with_capacity(urls.len());
        let mut validated = Vec::new();
        for url in &urls {
            let (check, passed) = self.check_url(url, &params).await;
            checks.push(check);
            validated.extend(passed);
        }

        let passed = validated.len();
        self.logger.info(&format!(
            "{} URLs passed, {} failed",
            passed,
            urls.len().saturating_sub(passed)
        ));

        validated.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        let mut final_urls = HashSet::new();
        validated.retain(|page| final_urls.insert(page.url.clone()));
        validated.truncate(self.settings.max_urls);

        if !checks.is_empty() {
            self.save_report(&params, urls.len(), passed, &checks).await;
        }

        let summary = self.summarize(&validated, params.record.annotation_count());

        ValidationOutcome { summary, checks }
    }
}
