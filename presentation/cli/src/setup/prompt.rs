use std::io::{BufRead, Write};

use business::domain::inspection::errors::InspectionError;
use business::domain::inspection::services::ContinuationPrompt;

/// Asks on the terminal; only a literal `y` (any case) continues.
pub struct StdinPrompt;

impl ContinuationPrompt for StdinPrompt {
    fn should_continue(&self, reason: &str) -> Result<bool, InspectionError> {
        let mut stderr = std::io::stderr();
        write!(stderr, "Network error: {reason}\nContinue processing? (y/n): ")
            .and_then(|_| stderr.flush())
            .map_err(|e| InspectionError::PromptUnavailable(e.to_string()))?;

        read_answer(&mut std::io::stdin().lock())
    }
}

pub fn read_answer(reader: &mut impl BufRead) -> Result<bool, InspectionError> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err(InspectionError::PromptUnavailable("stdin closed".to_string())),
        Ok(_) => Ok(line.trim().eq_ignore_ascii_case("y")),
        Err(e) => Err(InspectionError::PromptUnavailable(e.to_string())),
    }
}
