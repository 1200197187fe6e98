use async_trait::async_trait;

use crate::domain::inspection::model::InspectionRow;

use super::errors::RuleError;
use super::model::{JudgeInput, RuleContext};

/// Service port for writing RSL rules and explaining them.
#[async_trait]
pub trait RuleAuthorService: Send + Sync {
    async fn generate_rule(
        &self,
        row: &InspectionRow,
        context: &RuleContext,
    ) -> Result<String, RuleError>;

    async fn describe_rule(&self, row: &InspectionRow, rule: &str) -> Result<String, RuleError>;
}

/// Service port for judging a generated rule.
#[async_trait]
pub trait RuleJudgeService: Send + Sync {
    /// Lists functions called by the rule that are not RSL built-ins.
    async fn report_unknown_functions(&self, input: &JudgeInput) -> Result<String, RuleError>;

    /// Yes/No verdict on the rule's correctness, with a short reason when No.
    async fn evaluate(&self, input: &JudgeInput) -> Result<String, RuleError>;

    /// Combined verdict and unknown-function report, used when the primary calls fail.
    /// `input.web_pages` holds the curated fallback pages in that case.
    async fn fallback_evaluate(&self, input: &JudgeInput) -> Result<String, RuleError>;
}
