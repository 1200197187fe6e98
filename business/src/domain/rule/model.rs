use serde::{Deserialize, Serialize};

use crate::domain::inspection::model::InspectionRow;

/// One RSL built-in function as listed in `builtinfs.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Builtin {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(rename = "return", default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// An existing, hand-written RSL rule used as a few-shot example.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleExample {
    pub filename: String,
    pub content: String,
}

/// RSL knowledge shared by every prompt of a run.
#[derive(Debug, Clone, Default)]
pub struct RuleContext {
    pub builtins: Vec<Builtin>,
    pub examples: Vec<RuleExample>,
}

impl RuleContext {
    pub fn new(builtins: Vec<Builtin>, examples: Vec<RuleExample>) -> Self {
        Self { builtins, examples }
    }

    /// Built-ins grouped by category (first appearance order), one block per category.
    pub fn builtins_prompt(&self) -> String {
        if self.builtins.is_empty() {
            return "No RSL builtins available.".to_string();
        }

        let mut categories: Vec<(String, Vec<&Builtin>)> = Vec::new();
        for builtin in &self.builtins {
            let category = builtin.category.as_deref().unwrap_or("other");
            match categories.iter_mut().find(|(name, _)| name == category) {
                Some((_, members)) => members.push(builtin),
                None => categories.push((category.to_string(), vec![builtin])),
            }
        }

        let mut formatted = String::from("=== RSL Built-in Functions ===\n\n");
        for (category, members) in categories {
            formatted.push_str(&format!("## {}:\n", category.to_uppercase()));
            for builtin in members {
                formatted.push_str(&format!(
                    "  - {}: {}\n    Signature: {}\n    Return: {}\n",
                    builtin.name,
                    builtin.purpose,
                    builtin.signature.as_deref().unwrap_or("N/A"),
                    builtin.return_type.as_deref().unwrap_or("N/A"),
                ));
            }
            formatted.push('\n');
        }
        formatted
    }

    pub fn examples_prompt(&self) -> String {
        if self.examples.is_empty() {
            return "No existing rule examples available.".to_string();
        }

        let mut formatted = String::from("=== Existing RSL Rule Examples ===\n\n");
        for (index, example) in self.examples.iter().enumerate() {
            formatted.push_str(&format!(
                "--- Example {}: {} ---\n{}\n\n",
                index + 1,
                example.filename,
                example.content
            ));
        }
        formatted
    }

    /// Comma separated list of the valid built-in names, used by the judge prompts.
    pub fn builtin_names(&self) -> String {
        let names: Vec<&str> = self
            .builtins
            .iter()
            .map(|b| b.name.as_str())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return "No RSL built-in functions available.".to_string();
        }
        format!("Valid RSL Built-in Functions:\n{}", names.join(", "))
    }
}

/// Everything the judge needs to assess one generated rule.
#[derive(Debug, Clone)]
pub struct JudgeInput {
    pub row: InspectionRow,
    pub rule: String,
    pub description: String,
    pub web_pages: String,
    pub builtin_names: String,
}
