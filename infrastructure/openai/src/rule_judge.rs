use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use business::domain::rule::errors::RuleError;
use business::domain::rule::model::JudgeInput;
use business::domain::rule::services::RuleJudgeService;

use crate::client::{ModelSettings, OpenAIClient};

const UNKNOWN_FUNCTIONS_INSTRUCTIONS: &str = r#"You are an expert in metadata-related bugs in Java applications.
Validate the GPT-5-generated rule based on the framework, topic, issue description, and the existing builtin function list.
Check if the rule uses only these valid functions. Report any non-existing functions following these steps:
1. Extract the function names used in the generated rule.
2. Check if a function name in the generated rule is seen in the builtin_functions list.
3. If a function name in the generated rule not seen in the builtin_functions list, tell me the function name."#;

const EVALUATION_INSTRUCTIONS: &str = r#"You are an expert in metadata-related bugs in Java applications.
Validate the GPT-5-generated rule based on the framework, topic, issue description, and the given example.
If the rule is correct, submit 'Yes.' as the result. If the rule is incorrect, submit 'No' with a brief explanation.
1. Your validation result should not be influenced  by the none-existing functions in the rule if any.
2  Indicate "Yes" or "No" first in terms of the generated rule's correctness with respect to the given example.
3. If your answer is "No", briefly explain why the rule is incorrect."#;

const FALLBACK_INSTRUCTIONS: &str = r#"You are an expert in metadata-related bugs in Java applications.
Validate the GPT-5-generated rule based on the topic, content, and the given example.
If the rule is correct, submit 'Yes.' as the result. If the rule is incorrect, submit 'No' with a brief explanation.
Your evaluation should not consider if there are any non-existing functions in the rule yet.
To answer "Correct," the generated rule should be coherent with the topic, issue description,
rule description and located web pages's content. Your validation result should not be influenced
by the non-existing functions in the rule. Indicate "Yes" or "No" first, then report
any none-existing functions name: example_new_function_name()."#;

const FALLBACK_STEPS: &str = r#"Check if the rule uses only these valid functions. Report any none-existing functions following these steps:
1. Extract the function names with parentheses, (), from the generated rule.
2. Check if the function name is seen in the builtin_functions list.
3. If the function name is not seen, report it.

From each generated rule, simply list all none-existing functions that satisfy the statements above."#;

/// Judges generated rules through the Responses API.
pub struct RuleJudgeOpenAI {
    client: Arc<OpenAIClient>,
    settings: ModelSettings,
}

impl RuleJudgeOpenAI {
    pub fn new(client: Arc<OpenAIClient>, settings: ModelSettings) -> Self {
        Self { client, settings }
    }

    fn rule_sections(input: &JudgeInput) -> String {
        format!(
            "Evaluate this RSL rule:\n\n=== INSPECTION DATA ===\nFramework: {}\nTopic: {}\nIssue: {}\n\n=== GENERATED RSL RULE ===\n{}\n\n=== RULE DESCRIPTION ===\n{}\n\n=== FALLBACK WEB RESOURCES ===\n{}",
            input.row.framework,
            input.row.topic,
            input.row.description,
            input.rule,
            input.description,
            input.web_pages
        )
    }

    /// Context shared by the unknown-function report and the evaluation.
    pub fn context(input: &JudgeInput) -> String {
        format!(
            "{}\n\n=== EXISING FUNCTION LIST ===\n{}\n\n\nFrom the generated rule, list any non-existing function name.",
            Self::rule_sections(input),
            input.builtin_names
        )
    }

    /// The built-in list becomes a section heading followed by the lookup steps.
    pub fn fallback_context(input: &JudgeInput) -> String {
        format!(
            "{}\n\n=== {} ===\n{}",
            Self::rule_sections(input),
            input.builtin_names,
            FALLBACK_STEPS
        )
    }

    async fn ask(&self, context: String, instructions: &str) -> Result<String, RuleError> {
        let body = self
            .settings
            .body(json!([{"role": "developer", "content": context}]), instructions);
        Ok(self.client.respond(&body).await?)
    }
}

#[async_trait]
impl RuleJudgeService for RuleJudgeOpenAI {
    async fn report_unknown_functions(&self, input: &JudgeInput) -> Result<String, RuleError> {
        tracing::debug!(model = %self.settings.model, "Requesting unknown-function report");
        self.ask(Self::context(input), UNKNOWN_FUNCTIONS_INSTRUCTIONS)
            .await
    }

    async fn evaluate(&self, input: &JudgeInput) -> Result<String, RuleError> {
        tracing::debug!(model = %self.settings.model, "Requesting rule evaluation");
        self.ask(Self::context(input), EVALUATION_INSTRUCTIONS).await
    }

    async fn fallback_evaluate(&self, input: &JudgeInput) -> Result<String, RuleError> {
        tracing::debug!(model = %self.settings.model, "Requesting fallback evaluation");
        self.ask(Self::fallback_context(input), FALLBACK_INSTRUCTIONS)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::inspection::model::InspectionRow;

    fn input() -> JudgeInput {
        JudgeInput {
            row: InspectionRow {
                framework: "JPA".to_string(),
                topic: "Missing @Id".to_string(),
                description: "no id".to_string(),
                ..Default::default()
            },
            rule: "rule Id { }".to_string(),
            description: "checks ids".to_string(),
            web_pages: "1. https://docs.org".to_string(),
            builtin_names: "Valid RSL Built-in Functions:\nhasAnnotation".to_string(),
        }
    }

    #[test]
    fn should_build_context_with_every_section() {
        let context = RuleJudgeOpenAI::context(&input());

        assert!(context.starts_with("Evaluate this RSL rule:"));
        assert!(context.contains("Framework: JPA\nTopic: Missing @Id\nIssue: no id"));
        assert!(context.contains("=== GENERATED RSL RULE ===\nrule Id { }"));
        assert!(context.contains("=== FALLBACK WEB RESOURCES ===\n1. https://docs.org"));
        assert!(context.contains("=== EXISING FUNCTION LIST ===\nValid RSL Built-in Functions:\nhasAnnotation"));
        assert!(context.ends_with("From the generated rule, list any non-existing function name."));
    }

    #[test]
    fn should_head_fallback_steps_with_the_builtin_list() {
        let context = RuleJudgeOpenAI::fallback_context(&input());

        assert!(context.contains(
            "=== Valid RSL Built-in Functions:\nhasAnnotation ===\nCheck if the rule uses only these valid functions."
        ));
        assert!(context.contains("1. Extract the function names with parentheses, (), from the generated rule."));
        assert!(!context.contains("EXISING FUNCTION LIST"));
        assert!(context.ends_with("simply list all none-existing functions that satisfy the statements above."));
    }

    #[test]
    fn should_ignore_unknown_functions_when_evaluating() {
        assert!(EVALUATION_INSTRUCTIONS
            .contains("should not be influenced  by the none-existing functions in the rule if any."));
        assert!(FALLBACK_INSTRUCTIONS.ends_with("any none-existing functions name: example_new_function_name()."));
    }
}
