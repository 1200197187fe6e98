use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "rulegen";

/// `Logger` backed by `tracing`. Every event carries the pipeline stage it came from
/// as the `stage` field, so `RUST_LOG=rulegen=debug` shows one stage at a time when grepped.
pub struct TracingLogger {
    stage: &'static str,
}

impl TracingLogger {
    pub fn new(stage: &'static str) -> Self {
        Self { stage }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("main")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, stage = self.stage, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, stage = self.stage, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, stage = self.stage, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, stage = self.stage, "{}", message);
    }
}
