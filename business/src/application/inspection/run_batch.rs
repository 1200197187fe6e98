use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::annotation::catalog::AnnotationCatalog;
use crate::domain::annotation::repository::AnnotationRepository;
use crate::domain::inspection::errors::InspectionError;
use crate::domain::inspection::model::{InspectionRow, InspectionSheet, SaveSlot};
use crate::domain::inspection::repository::InspectionRepository;
use crate::domain::inspection::services::ContinuationPrompt;
use crate::domain::inspection::use_cases::process_row::{ProcessRowParams, ProcessRowUseCase};
use crate::domain::inspection::use_cases::run_batch::{
    BatchOutcome, RunBatchParams, RunBatchUseCase,
};
use crate::domain::logger::Logger;

const SAVE_EVERY: usize = 5;

enum Stop {
    Finished,
    Cancelled,
}

pub struct RunBatchUseCaseImpl {
    pub repository: Arc<dyn InspectionRepository>,
    pub annotations: Arc<dyn AnnotationRepository>,
    pub catalog: Arc<AnnotationCatalog>,
    pub process_row: Arc<dyn ProcessRowUseCase>,
    pub prompt: Arc<dyn ContinuationPrompt>,
    pub row_delay: Duration,
    pub logger: Arc<dyn Logger>,
}

impl RunBatchUseCaseImpl {
    async fn process_rows(
        &self,
        sheet: &InspectionSheet,
        output: &mut InspectionSheet,
        processed: &mut usize,
        params: &RunBatchParams,
    ) -> Result<Stop, InspectionError> {
        for (index, sheet_row) in sheet.rows.iter().enumerate() {
            if params.cancel.is_cancelled() {
                return Ok(Stop::Cancelled);
            }
            if params.max_rows.is_some_and(|max| *processed >= max) {
                break;
            }

            let row = InspectionRow::from_sheet_row(sheet_row);
            if row.topic.is_empty() {
                output.rows.push(sheet_row.clone().with_empty_generated());
                continue;
            }

            *processed += 1;
            self.logger
                .info(&format!("[{}] Row {}: {}", processed, index + 1, row.topic));

            // A row that already finished is kept even if Ctrl+C arrived meanwhile.
            let result = tokio::select! {
                biased;
                result = self.process_row.execute(ProcessRowParams { row, row_index: index }) => result,
                _ = params.cancel.cancelled() => return Ok(Stop::Cancelled),
            };

            match result {
                Ok(content) => {
                    output.rows.push(sheet_row.clone().with_generated(&content));
                    self.periodic_save(output, *processed, false).await;
                    if self.pause(&params.cancel).await {
                        return Ok(Stop::Cancelled);
                    }
                }
                Err(InspectionError::Network(cause)) => {
                    self.logger
                        .warn(&format!("Network error on row {}: {}", processed, cause));
                    self.periodic_save(output, *processed, true).await;
                    if !self.ask_to_continue(cause, &params.cancel).await? {
                        self.logger.info("Stopping after network error");
                        return Ok(Stop::Cancelled);
                    }
                }
                Err(error) => {
                    self.logger
                        .error(&format!("Error processing row {}: {}", processed, error));
                    output
                        .rows
                        .push(sheet_row.clone().with_error(&error.to_string()));
                    self.periodic_save(output, *processed, false).await;
                }
            }
        }

        Ok(Stop::Finished)
    }

    // Returns true when cancelled during the pause.
    async fn pause(&self, cancel: &CancellationToken) -> bool {
        tokio::select! {
            _ = cancel.cancelled() => true,
            _ = tokio::time::sleep(self.row_delay) => false,
        }
    }

    // The prompt blocks on the terminal, so it runs on a detached thread that a
    // cancelled run does not wait for. Cancellation answers "stop".
    async fn ask_to_continue(
        &self,
        cause: String,
        cancel: &CancellationToken,
    ) -> Result<bool, InspectionError> {
        let prompt = self.prompt.clone();
        let (answer_tx, answer_rx) = tokio::sync::oneshot::channel();
        std::thread::Builder::new()
            .name("continuation-prompt".to_string())
            .spawn(move || {
                let _ = answer_tx.send(prompt.should_continue(&cause));
            })
            .map_err(|e| InspectionError::PromptUnavailable(e.to_string()))?;

        tokio::select! {
            _ = cancel.cancelled() => Ok(false),
            answer = answer_rx => {
                answer.map_err(|e| InspectionError::PromptUnavailable(e.to_string()))?
            }
        }
    }

    async fn snapshot(
        &self,
        output: &InspectionSheet,
        slots: &[SaveSlot],
    ) -> Result<(), InspectionError> {
        for slot in slots {
            let location = self.repository.save(output, *slot).await?;
            self.logger.info(&format!("Saved {} sheet to {}", slot, location));
        }
        let location = self.annotations.save(&self.catalog.document()).await?;
        self.logger
            .info(&format!("Saved annotations to {}", location));
        Ok(())
    }

    async fn periodic_save(&self, output: &InspectionSheet, processed: usize, force: bool) {
        if !force && (processed == 0 || processed % SAVE_EVERY != 0) {
            return;
        }
        self.logger
            .info(&format!("Saving progress at row {}", processed));
        if let Err(error) = self
            .snapshot(output, &[SaveSlot::Progress(processed), SaveSlot::Main])
            .await
        {
            self.logger
                .warn(&format!("Periodic save failed: {}", error));
        }
    }

    async fn finish(&self, output: &InspectionSheet) -> Result<String, InspectionError> {
        let annotations = self.annotations.save(&self.catalog.document()).await?;
        self.logger
            .info(&format!("Saved annotations to {}", annotations));
        Ok(self.repository.save(output, SaveSlot::Main).await?)
    }

    async fn run(
        &self,
        sheet: &InspectionSheet,
        output: &mut InspectionSheet,
        processed: &mut usize,
        params: &RunBatchParams,
    ) -> Result<BatchOutcome, InspectionError> {
        match self.process_rows(sheet, output, processed, params).await? {
            Stop::Cancelled => {
                self.logger.warn(&format!(
                    "Interrupted after {} processed rows",
                    processed
                ));
                if !output.rows.is_empty() {
                    if let Err(error) = self
                        .snapshot(output, &[SaveSlot::Interrupted, SaveSlot::Main])
                        .await
                    {
                        self.logger
                            .error(&format!("Saving interrupted run failed: {}", error));
                    }
                }
                Ok(BatchOutcome::Interrupted {
                    processed: *processed,
                })
            }
            Stop::Finished => {
                let location = self.finish(output).await?;
                self.logger.info(&format!(
                    "Completed: {} rows processed, output at {}",
                    processed, location
                ));
                Ok(BatchOutcome::Completed {
                    processed: *processed,
                    output: location,
                })
            }
        }
    }
}

#[async_trait]
impl RunBatchUseCase for RunBatchUseCaseImpl {
    async fn execute(&self, params: RunBatchParams) -> Result<BatchOutcome, InspectionError> {
        let sheet = self.repository.load().await?;
        if sheet.rows.is_empty() {
            return Err(InspectionError::InputEmpty);
        }
        self.logger
            .info(&format!("Processing {} rows", sheet.rows.len()));

        let mut output = InspectionSheet::new(sheet.output_columns(), Vec::new());
        let mut processed = 0;

        match self.run(&sheet, &mut output, &mut processed, &params).await {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                self.logger.error(&format!("Fatal error: {}", error));
                if !output.rows.is_empty() {
                    if let Err(save_error) = self.snapshot(&output, &[SaveSlot::Error]).await {
                        self.logger
                            .error(&format!("Emergency save failed: {}", save_error));
                    }
                }
                Err(error)
            }
        }
    }
}
