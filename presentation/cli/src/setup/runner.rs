use std::future::Future;
use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use business::domain::inspection::use_cases::run_batch::{BatchOutcome, RunBatchParams};

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;

pub struct Runner;

impl Runner {
    /// Wire dependencies, hook Ctrl+C and SIGTERM, and drive the batch to completion
    ///
    /// Completed and interrupted runs exit successfully; fatal errors surface as `Err`.
    pub async fn run(config: AppConfig) -> anyhow::Result<ExitCode> {
        let Some(api_key) = config.openai.api_key.clone() else {
            warn!(
                key_file = %config.paths.key_file().display(),
                "OPENAI_API_KEY is not set and no key file was found; nothing to do"
            );
            return Ok(ExitCode::SUCCESS);
        };

        info!(
            input = %config.paths.input.display(),
            output = %config.paths.output.display(),
            max_rows = ?config.run.max_rows,
            "Starting rule generation"
        );

        let container = DependencyContainer::new(&config, api_key).await?;

        let shutdown = CancellationToken::new();
        watch_signals(&shutdown);

        let outcome = container
            .run_batch
            .execute(RunBatchParams {
                max_rows: config.run.max_rows,
                cancel: shutdown,
            })
            .await?;

        match outcome {
            BatchOutcome::Completed { processed, output } => {
                info!(processed, output = %output, "Rule generation finished");
            }
            BatchOutcome::Interrupted { processed } => {
                warn!(processed, "Rule generation interrupted; progress saved");
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Both Ctrl+C and SIGTERM stop the batch the same way.
fn watch_signals(shutdown: &CancellationToken) {
    tokio::spawn(cancel_when(
        async { tokio::signal::ctrl_c().await.is_ok() },
        shutdown.clone(),
        "Ctrl+C",
    ));

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::spawn(cancel_when(
                    async move { sigterm.recv().await.is_some() },
                    shutdown.clone(),
                    "SIGTERM",
                ));
            }
            Err(e) => warn!(error = %e, "Could not listen for SIGTERM"),
        }
    }
}

async fn cancel_when(received: impl Future<Output = bool>, token: CancellationToken, name: &str) {
    if received.await {
        info!(signal = name, "Signal received; stopping and saving progress");
        token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[tokio::test]
    async fn should_exit_successfully_without_api_key() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let base_dir = dir.path().to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["rulegen", "--base-dir", base_dir.as_str()]).unwrap();
        let mut config = AppConfig::from_cli(cli);
        config.openai.api_key = None;

        // Act
        let code = Runner::run(config).await.unwrap();

        // Assert
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(!dir.path().join("sample_output_with_rules.csv").exists());
    }

    #[tokio::test]
    async fn should_cancel_run_when_signal_arrives() {
        let token = CancellationToken::new();

        cancel_when(async { true }, token.clone(), "SIGTERM").await;

        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn should_keep_running_when_signal_stream_closes() {
        let token = CancellationToken::new();

        cancel_when(async { false }, token.clone(), "SIGTERM").await;

        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn should_install_signal_listeners_without_cancelling() {
        let token = CancellationToken::new();

        watch_signals(&token);
        tokio::task::yield_now().await;

        assert!(!token.is_cancelled());
    }
}
