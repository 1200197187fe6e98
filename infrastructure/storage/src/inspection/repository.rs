use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::inspection::model::{InspectionSheet, SaveSlot, SheetRow};
use business::domain::inspection::repository::InspectionRepository;

use crate::files::{decode_text, read_optional, slot_path, write_file, UTF8_BOM};

/// Reads the input sheet from one CSV file and writes snapshots next to the output CSV.
pub struct CsvInspectionRepository {
    input: PathBuf,
    output: PathBuf,
}

impl CsvInspectionRepository {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    pub fn parse(text: &str) -> Result<InspectionSheet, RepositoryError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let columns: Vec<String> = reader
            .headers()
            .map_err(RepositoryError::malformed)?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(RepositoryError::malformed)?;
            let cells = columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    (column.clone(), record.get(index).unwrap_or_default().to_string())
                })
                .collect();
            rows.push(SheetRow::new(cells));
        }

        Ok(InspectionSheet::new(columns, rows))
    }

    /// UTF-8 with BOM so spreadsheet tools pick the right encoding.
    pub fn render(sheet: &InspectionSheet) -> Result<Vec<u8>, RepositoryError> {
        let mut buffer = UTF8_BOM.to_vec();
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            writer
                .write_record(&sheet.columns)
                .map_err(RepositoryError::write_failed)?;
            for row in &sheet.rows {
                writer
                    .write_record(sheet.columns.iter().map(|column| row.get(column)))
                    .map_err(RepositoryError::write_failed)?;
            }
            writer.flush().map_err(RepositoryError::write_failed)?;
        }
        Ok(buffer)
    }
}

#[async_trait]
impl InspectionRepository for CsvInspectionRepository {
    async fn load(&self) -> Result<InspectionSheet, RepositoryError> {
        let bytes = read_optional(&self.input)
            .await?
            .ok_or_else(RepositoryError::not_found)?;
        let sheet = Self::parse(&decode_text(&bytes))?;
        tracing::debug!(
            path = %self.input.display(),
            rows = sheet.rows.len(),
            "Loaded inspection sheet"
        );
        Ok(sheet)
    }

    async fn save(&self, sheet: &InspectionSheet, slot: SaveSlot) -> Result<String, RepositoryError> {
        let path = slot_path(&self.output, slot);
        write_file(&path, &Self::render(sheet)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::inspection::model::{GeneratedContent, RULE_COLUMN, TOPIC_COLUMN};

    #[test]
    fn should_parse_quoted_multiline_cells() {
        let sheet = CsvInspectionRepository::parse(
            "Name of FRAMEWORK,TOPIC from JetBrains\nJPA,\"Missing @Id\nsecond line\"\nCDI\n",
        )
        .unwrap();

        assert_eq!(sheet.columns, vec!["Name of FRAMEWORK", TOPIC_COLUMN]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].get(TOPIC_COLUMN), "Missing @Id\nsecond line");
        assert_eq!(sheet.rows[1].get(TOPIC_COLUMN), "");
    }

    #[tokio::test]
    async fn should_load_latin1_input_with_bom_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("c_input.csv");
        std::fs::write(&input, b"TOPIC from JetBrains\nCaf\xE9 bean\n").unwrap();

        let repository = CsvInspectionRepository::new(input, dir.path().join("out.csv"));
        let sheet = repository.load().await.unwrap();

        assert_eq!(sheet.rows[0].get(TOPIC_COLUMN), "Café bean");
    }

    #[tokio::test]
    async fn should_report_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let repository = CsvInspectionRepository::new(
            dir.path().join("nope.csv"),
            dir.path().join("out.csv"),
        );

        assert!(matches!(repository.load().await, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_write_snapshot_with_bom_and_generated_columns() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("results/out.csv");
        let repository = CsvInspectionRepository::new(dir.path().join("in.csv"), output);

        let input = InspectionSheet::new(vec![TOPIC_COLUMN.to_string()], vec![]);
        let row = SheetRow::new(vec![(TOPIC_COLUMN.to_string(), "Missing @Id".to_string())])
            .with_generated(&GeneratedContent {
                rule: "rule A {\n}".to_string(),
                ..Default::default()
            });
        let sheet = InspectionSheet::new(input.output_columns(), vec![row]);

        let location = repository.save(&sheet, SaveSlot::Progress(5)).await.unwrap();

        assert!(location.ends_with("out_progress_5.csv"));
        let bytes = std::fs::read(dir.path().join("results/out_progress_5.csv")).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let reread = CsvInspectionRepository::parse(&decode_text(&bytes)).unwrap();
        assert_eq!(reread.columns.len(), 6);
        assert_eq!(reread.rows[0].get(RULE_COLUMN), "rule A {\n}");
    }
}
