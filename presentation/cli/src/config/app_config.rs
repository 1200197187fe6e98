use super::{
    openai_config::OpenAIConfig, paths_config::PathsConfig, run_config::RunConfig,
    validation_config::ValidationConfig,
};
use crate::cli::Cli;

pub struct AppConfig {
    pub paths: PathsConfig,
    pub openai: OpenAIConfig,
    pub validation: ValidationConfig,
    pub run: RunConfig,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        let paths = PathsConfig::from_cli(&cli);
        Self {
            openai: OpenAIConfig::from_cli(&cli, &paths.key_file()),
            validation: ValidationConfig::from_cli(&cli),
            run: RunConfig::from_cli(&cli),
            paths,
        }
    }
}
