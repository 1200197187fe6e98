use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use business::domain::inspection::model::InspectionRow;
use business::domain::rule::errors::RuleError;
use business::domain::rule::grammar::RSL_SYNTAX;
use business::domain::rule::model::RuleContext;
use business::domain::rule::services::RuleAuthorService;

use crate::client::{ModelSettings, OpenAIClient};

const GENERATION_TASK: &str = r#"=== TASK ===
Generate a syntactically correct RSL rule that:
1. Follows the given RSL syntax grammar exactly
2. Uses appropriate RSL built-in functions ONLY while not introducing new built-in functions
3. Follows patterns from the existing rule examples semantically
4. Refer to the provided issue description and example code snippets if any semantically and syntactically
5. Adheres to the existing built-in functions' signature, parameters, and return value
6. Utimately a newly generated rule should support the usage constraints described by the topic, issue description, and example.
7. If the generated RSL rule is too large, split it into multiple independent RSL rules so that each rule examines only one metadata misuse pattern.

Output ONLY the RSL rule code."#;

const DESCRIPTION_TASK: &str = r#"Provide the following information:
1. What constraints this rule detects or each rule detects if there are multiple generated rules
2. How and what the the existing builtin functions are used per generated rule
3. Detection logic step by step per rule
4. Answer if each generated rule necessarily address a bug that must be fixed for what kind of reasons"#;

/// Writes RSL rules and their explanations through the Responses API.
pub struct RuleAuthorOpenAI {
    client: Arc<OpenAIClient>,
    settings: ModelSettings,
}

impl RuleAuthorOpenAI {
    pub fn new(client: Arc<OpenAIClient>, settings: ModelSettings) -> Self {
        Self { client, settings }
    }

    fn inspection_block(row: &InspectionRow) -> String {
        format!(
            "=== JETBRAINS INSPECTION DATA ===\nFramework: {}\nSource: {}\nTopic: {}\nIssue Description: {}\nExamples: {}",
            row.framework,
            row.source,
            row.topic,
            row.description,
            row.examples_or_placeholder()
        )
    }

    pub fn generation_prompt(context: &RuleContext) -> String {
        format!(
            "You are an expert in Java metadata bug detection using RSL (Rule Specification Language).\nGenerate an RSL rule to detect the metadata bug described below.\n\n=== RSL CORE SYNTAX ===\n{}\n\n{}\n\n{}",
            RSL_SYNTAX.trim(),
            context.builtins_prompt().trim_end(),
            context.examples_prompt().trim_end()
        )
    }

    pub fn generation_instructions(row: &InspectionRow) -> String {
        format!("{}\n\n{}", Self::inspection_block(row), GENERATION_TASK)
    }

    pub fn description_prompt(row: &InspectionRow, rule: &str) -> String {
        format!(
            "Explain this RSL-expressed rule for detecting metadata bugs Java applications:\nBased on the framework, source, topic, issue description, and examples if any\n{}\n\nWhen explaining each generated rule,\nRSL-expressed rule:\n{}\n\n\nExplain this RSL-expressed rule for detecting metadata bugs Java applications.",
            Self::inspection_block(row),
            rule
        )
    }
}

#[async_trait]
impl RuleAuthorService for RuleAuthorOpenAI {
    async fn generate_rule(
        &self,
        row: &InspectionRow,
        context: &RuleContext,
    ) -> Result<String, RuleError> {
        let body = self.settings.body(
            json!([{"role": "developer", "content": Self::generation_prompt(context)}]),
            &Self::generation_instructions(row),
        );
        tracing::debug!(model = %self.settings.model, "Requesting rule generation");
        Ok(self.client.respond(&body).await?)
    }

    async fn describe_rule(&self, row: &InspectionRow, rule: &str) -> Result<String, RuleError> {
        let body = self.settings.body(
            json!([{"role": "system", "content": Self::description_prompt(row, rule)}]),
            DESCRIPTION_TASK,
        );
        tracing::debug!(model = %self.settings.model, "Requesting rule description");
        Ok(self.client.respond(&body).await?)
    }
}
