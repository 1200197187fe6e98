pub const FRAMEWORK_COLUMN: &str = "Name of FRAMEWORK";
pub const SOURCE_COLUMN: &str = "SOURCE from JetBrains";
pub const TOPIC_COLUMN: &str = "TOPIC from JetBrains";
pub const DESCRIPTION_COLUMN: &str = "REPORTED ISSUE DESCRIPTIONS from JetBrains";
pub const EXAMPLES_COLUMN: &str = "EXAMPLE(S) from SOURCE";

pub const RULE_COLUMN: &str = "GPT-5 Generated Rule";
pub const RULE_DESCRIPTION_COLUMN: &str = "GPT-5 Description of Rule";
pub const WEB_PAGES_COLUMN: &str = "3rd-Party Web Pages (No-JetBrains)";
pub const UNKNOWN_FUNCTIONS_COLUMN: &str = "GPT-5-reported None-Existing Functions";
pub const EVALUATION_COLUMN: &str = "GPT-5 Evaluation Opinion";

/// Columns appended to every row of the output sheet, in output order.
pub const GENERATED_COLUMNS: [&str; 5] = [
    RULE_COLUMN,
    RULE_DESCRIPTION_COLUMN,
    WEB_PAGES_COLUMN,
    UNKNOWN_FUNCTIONS_COLUMN,
    EVALUATION_COLUMN,
];

/// The fields of one JetBrains inspection record the pipeline works on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectionRow {
    pub framework: String,
    pub source: String,
    pub topic: String,
    pub description: String,
    pub examples: String,
}

impl InspectionRow {
    /// Reads the known columns of a sheet row. Missing columns read as empty.
    pub fn from_sheet_row(row: &SheetRow) -> Self {
        Self {
            framework: row.get(FRAMEWORK_COLUMN).to_string(),
            source: row.get(SOURCE_COLUMN).to_string(),
            topic: row.get(TOPIC_COLUMN).trim().to_string(),
            description: row.get(DESCRIPTION_COLUMN).to_string(),
            examples: row.get(EXAMPLES_COLUMN).to_string(),
        }
    }

    pub fn examples_or_placeholder(&self) -> &str {
        if self.examples.is_empty() {
            "No examples provided"
        } else {
            &self.examples
        }
    }
}

/// Output of the pipeline for one row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedContent {
    pub rule: String,
    pub rule_description: String,
    pub web_pages: String,
    pub unknown_functions: String,
    pub evaluation: String,
}

/// One sheet row, keeping the column order it was read with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    cells: Vec<(String, String)>,
}

impl SheetRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: &str) -> &str {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| name == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column.to_string(), value)),
        }
    }

    pub fn cells(&self) -> &[(String, String)] {
        &self.cells
    }

    pub fn with_generated(mut self, content: &GeneratedContent) -> Self {
        self.set(RULE_COLUMN, content.rule.as_str());
        self.set(RULE_DESCRIPTION_COLUMN, content.rule_description.as_str());
        self.set(WEB_PAGES_COLUMN, content.web_pages.as_str());
        self.set(UNKNOWN_FUNCTIONS_COLUMN, content.unknown_functions.as_str());
        self.set(EVALUATION_COLUMN, content.evaluation.as_str());
        self
    }

    pub fn with_empty_generated(self) -> Self {
        self.with_generated(&GeneratedContent::default())
    }

    pub fn with_error(self, message: &str) -> Self {
        self.with_generated(&GeneratedContent {
            rule: format!("ERROR: {}", message),
            ..Default::default()
        })
    }
}

/// A whole inspection sheet: header plus rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectionSheet {
    pub columns: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl InspectionSheet {
    pub fn new(columns: Vec<String>, rows: Vec<SheetRow>) -> Self {
        Self { columns, rows }
    }

    /// Input columns followed by the generated ones, without duplicates.
    pub fn output_columns(&self) -> Vec<String> {
        let mut columns = self.columns.clone();
        for generated in GENERATED_COLUMNS {
            if !columns.iter().any(|c| c == generated) {
                columns.push(generated.to_string());
            }
        }
        columns
    }
}

/// Where a snapshot of the output sheet is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveSlot {
    Main,
    Progress(usize),
    Interrupted,
    Error,
}

impl std::fmt::Display for SaveSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveSlot::Main => write!(f, "main"),
            SaveSlot::Progress(count) => write!(f, "progress_{}", count),
            SaveSlot::Interrupted => write!(f, "interrupted"),
            SaveSlot::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_row(pairs: &[(&str, &str)]) -> SheetRow {
        SheetRow::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn should_read_inspection_row_from_sheet_row() {
        let row = sheet_row(&[
            (FRAMEWORK_COLUMN, "JPA"),
            (SOURCE_COLUMN, "IntelliJ"),
            (TOPIC_COLUMN, "  Missing @Id  "),
            (DESCRIPTION_COLUMN, "Entity without identifier"),
        ]);

        let inspection = InspectionRow::from_sheet_row(&row);

        assert_eq!(inspection.framework, "JPA");
        assert_eq!(inspection.topic, "Missing @Id");
        assert_eq!(inspection.examples, "");
        assert_eq!(inspection.examples_or_placeholder(), "No examples provided");
    }

    #[test]
    fn should_fill_generated_columns_on_error() {
        let row = sheet_row(&[(TOPIC_COLUMN, "t")]).with_error("boom");

        assert_eq!(row.get(RULE_COLUMN), "ERROR: boom");
        assert_eq!(row.get(EVALUATION_COLUMN), "");
        assert_eq!(row.cells().len(), 6);
    }

    #[test]
    fn should_overwrite_existing_cell_on_set() {
        let mut row = sheet_row(&[(TOPIC_COLUMN, "old")]);
        row.set(TOPIC_COLUMN, "new");
        assert_eq!(row.get(TOPIC_COLUMN), "new");
        assert_eq!(row.cells().len(), 1);
    }

    #[test]
    fn should_append_generated_columns_once() {
        let sheet = InspectionSheet::new(
            vec![TOPIC_COLUMN.to_string(), RULE_COLUMN.to_string()],
            vec![],
        );
        let columns = sheet.output_columns();
        assert_eq!(columns.len(), 6);
        assert_eq!(columns[0], TOPIC_COLUMN);
        assert_eq!(columns[1], RULE_COLUMN);
        assert_eq!(columns[5], EVALUATION_COLUMN);
    }
}
