use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::inspection::errors::InspectionError;
use crate::domain::inspection::model::{GeneratedContent, InspectionRow};
use crate::domain::inspection::use_cases::process_row::{ProcessRowParams, ProcessRowUseCase};
use crate::domain::logger::Logger;
use crate::domain::rule::errors::RuleError;
use crate::domain::rule::model::{JudgeInput, RuleContext};
use crate::domain::rule::services::{RuleAuthorService, RuleJudgeService};
use crate::domain::web::links::fallback_pages;
use crate::domain::web::use_cases::search_pages::{SearchWebPagesParams, SearchWebPagesUseCase};
use crate::domain::web::use_cases::validate_urls::{ValidateUrlsParams, ValidateUrlsUseCase};

// Leading characters a spreadsheet would read as a formula.
const FORMULA_PREFIXES: [char; 4] = ['=', '-', '+', '@'];

pub struct ProcessRowUseCaseImpl {
    pub author: Arc<dyn RuleAuthorService>,
    pub judge: Arc<dyn RuleJudgeService>,
    pub search: Arc<dyn SearchWebPagesUseCase>,
    pub validate: Arc<dyn ValidateUrlsUseCase>,
    pub context: Arc<RuleContext>,
    pub stage_delay: Duration,
    pub logger: Arc<dyn Logger>,
}

impl ProcessRowUseCaseImpl {
    async fn pause(&self) {
        if !self.stage_delay.is_zero() {
            tokio::time::sleep(self.stage_delay).await;
        }
    }

    async fn fallback(&self, input: &JudgeInput) -> String {
        let fallback_input = JudgeInput {
            web_pages: fallback_pages(&input.row.framework),
            ..input.clone()
        };
        match self.judge.fallback_evaluate(&fallback_input).await {
            Ok(text) => format!("[FBO] {}", text),
            Err(error) => {
                self.logger
                    .error(&format!("Fallback evaluation failed: {}", error));
                format!("[FBO] No - Fallback evaluation failed: {}", error)
            }
        }
    }

    async fn unknown_functions(&self, input: &JudgeInput) -> String {
        match self.judge.report_unknown_functions(input).await {
            Ok(text) => guard_formula(text.trim()),
            Err(error) => {
                self.logger.warn(&format!(
                    "Unknown-function report failed, using fallback: {}",
                    error
                ));
                self.fallback(input).await
            }
        }
    }

    async fn evaluation(&self, input: &JudgeInput) -> String {
        match self.judge.evaluate(input).await {
            Ok(text) => text.trim().to_string(),
            Err(error) => {
                self.logger
                    .warn(&format!("Evaluation failed, using fallback: {}", error));
                self.fallback(input).await
            }
        }
    }

    async fn rule(&self, row: &InspectionRow) -> Result<String, InspectionError> {
        match self.author.generate_rule(row, &self.context).await {
            Ok(rule) => Ok(rule),
            Err(error @ RuleError::Unreachable(_)) => {
                Err(InspectionError::Network(error.to_string()))
            }
            Err(error) => {
                self.logger.error(&format!("Rule generation failed: {}", error));
                Ok(format!("Error generating rule: {}", error))
            }
        }
    }
}

/// Prefixes text a spreadsheet would evaluate as a formula with `'`.
pub fn guard_formula(text: &str) -> String {
    if text.starts_with(FORMULA_PREFIXES) {
        format!("'{}", text)
    } else {
        text.to_string()
    }
}

#[async_trait]
impl ProcessRowUseCase for ProcessRowUseCaseImpl {
    async fn execute(&self, params: ProcessRowParams) -> Result<GeneratedContent, InspectionError> {
        let row = params.row;

        self.logger.info("[1/5] Generating rule");
        let rule = self.rule(&row).await?;
        self.pause().await;

        self.logger.info("[2/5] Describing rule");
        let rule_description = match self.author.describe_rule(&row, &rule).await {
            Ok(description) => description,
            Err(error) => {
                self.logger
                    .error(&format!("Rule description failed: {}", error));
                format!("Error generating description: {}", error)
            }
        };
        self.pause().await;

        self.logger.info("[3/5] Searching the web");
        let search = self
            .search
            .execute(SearchWebPagesParams {
                row: row.clone(),
                row_index: params.row_index,
            })
            .await;
        self.pause().await;

        self.logger.info("[4/5] Validating third-party URLs");
        let validation = self
            .validate
            .execute(ValidateUrlsParams {
                pages: search.pages,
                row: row.clone(),
                record: search.record,
            })
            .await;
        self.pause().await;

        let input = JudgeInput {
            row,
            rule: rule.clone(),
            description: rule_description.clone(),
            web_pages: validation.summary.clone(),
            builtin_names: self.context.builtin_names(),
        };

        self.logger.info("[5/5] Reporting unknown functions and evaluating");
        let unknown_functions = self.unknown_functions(&input).await;
        let evaluation = self.evaluation(&input).await;

        Ok(GeneratedContent {
            rule,
            rule_description,
            web_pages: validation.summary,
            unknown_functions,
            evaluation,
        })
    }
}
