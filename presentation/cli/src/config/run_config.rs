use std::time::Duration;

use crate::cli::Cli;

/// Batch pacing and limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub max_rows: Option<usize>,
    pub row_delay: Duration,
    pub stage_delay: Duration,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            max_rows: cli.max_rows,
            row_delay: Duration::from_secs(cli.row_delay_secs),
            stage_delay: Duration::from_millis(cli.stage_delay_ms),
        }
    }
}
