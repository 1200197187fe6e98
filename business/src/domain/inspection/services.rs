use super::errors::InspectionError;

/// Asks the operator whether the batch should go on after a network failure.
///
/// Returns `Err` when no answer can be obtained, e.g. stdin is closed.
pub trait ContinuationPrompt: Send + Sync {
    fn should_continue(&self, reason: &str) -> Result<bool, InspectionError>;
}
