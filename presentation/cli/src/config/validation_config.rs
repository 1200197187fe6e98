use std::time::Duration;

use business::domain::web::model::ValidationSettings;

use crate::cli::Cli;

/// URL validation tunables exposed on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    pub max_urls: usize,
    pub min_relevance: f64,
    pub use_llm: bool,
    pub url_timeout: Duration,
}

impl ValidationConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            max_urls: cli.max_urls,
            min_relevance: cli.min_relevance,
            use_llm: !cli.no_llm_validation,
            url_timeout: Duration::from_secs(cli.url_timeout_secs),
        }
    }

    /// Settings for the validation use case; borderline band and clamps keep their defaults.
    pub fn settings(&self) -> ValidationSettings {
        ValidationSettings {
            max_urls: self.max_urls,
            min_relevance: self.min_relevance,
            use_llm: self.use_llm,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn should_default_to_two_urls_with_llm_adjudication() {
        // Arrange
        let cli = Cli::try_parse_from(["rulegen"]).unwrap();

        // Act
        let config = ValidationConfig::from_cli(&cli);

        // Assert
        assert_eq!(config.max_urls, 2);
        assert_eq!(config.min_relevance, 0.30);
        assert!(config.use_llm);
        assert_eq!(config.url_timeout, Duration::from_secs(15));
        assert_eq!(config.settings(), ValidationSettings::default());
    }

    #[test]
    fn should_disable_llm_and_override_limits() {
        // Arrange
        let cli = Cli::try_parse_from([
            "rulegen",
            "--no-llm-validation",
            "--max-urls",
            "4",
            "--min-relevance",
            "0.5",
        ])
        .unwrap();

        // Act
        let settings = ValidationConfig::from_cli(&cli).settings();

        // Assert
        assert!(!settings.use_llm);
        assert_eq!(settings.max_urls, 4);
        assert_eq!(settings.min_relevance, 0.5);
        assert_eq!(settings.borderline, 0.25..=0.55);
    }
}
