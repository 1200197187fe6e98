use std::path::{Path, PathBuf};

use crate::cli::Cli;

const INPUT_FILE: &str = "c_input.csv";
const OUTPUT_FILE: &str = "sample_output_with_rules.csv";
const BUILTINS_FILE: &str = "builtinfs.json";
const ANNOTATIONS_FILE: &str = "extracted_annotations.json";
const REPORTS_DIR: &str = "url_reports";
pub const KEY_FILE: &str = "YOUR_KEY_IN_ENV_DONT_PUBLIC.txt";

/// Locations of every file the batch reads or writes
#[derive(Debug, Clone, PartialEq)]
pub struct PathsConfig {
    pub base_dir: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub builtins: PathBuf,
    pub annotations: PathBuf,
    pub reports_dir: PathBuf,
    pub rules_dir: PathBuf,
}

impl PathsConfig {
    /// Resolve paths from command line flags
    ///
    /// Unset entries default to fixed names under the base directory (default: ".");
    /// the rules directory defaults to `<base>/../artifact-submission/rules`.
    pub fn from_cli(cli: &Cli) -> Self {
        let base_dir = cli.base_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let under_base = |flag: &Option<PathBuf>, name: &str| {
            flag.clone().unwrap_or_else(|| base_dir.join(name))
        };

        Self {
            input: under_base(&cli.input, INPUT_FILE),
            output: under_base(&cli.output, OUTPUT_FILE),
            builtins: under_base(&cli.builtins, BUILTINS_FILE),
            annotations: under_base(&cli.annotations, ANNOTATIONS_FILE),
            reports_dir: under_base(&cli.reports_dir, REPORTS_DIR),
            rules_dir: cli
                .rules_dir
                .clone()
                .unwrap_or_else(|| default_rules_dir(&base_dir)),
            base_dir,
        }
    }

    pub fn key_file(&self) -> PathBuf {
        self.base_dir.join(KEY_FILE)
    }
}

fn default_rules_dir(base_dir: &Path) -> PathBuf {
    base_dir
        .join("..")
        .join("artifact-submission")
        .join("rules")
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn should_place_defaults_under_base_dir() {
        // Arrange
        let cli = Cli::try_parse_from(["rulegen", "--base-dir", "/data/run"]).unwrap();

        // Act
        let paths = PathsConfig::from_cli(&cli);

        // Assert
        assert_eq!(paths.input, PathBuf::from("/data/run/c_input.csv"));
        assert_eq!(
            paths.output,
            PathBuf::from("/data/run/sample_output_with_rules.csv")
        );
        assert_eq!(paths.builtins, PathBuf::from("/data/run/builtinfs.json"));
        assert_eq!(
            paths.annotations,
            PathBuf::from("/data/run/extracted_annotations.json")
        );
        assert_eq!(paths.reports_dir, PathBuf::from("/data/run/url_reports"));
        assert_eq!(
            paths.rules_dir,
            PathBuf::from("/data/run/../artifact-submission/rules")
        );
        assert_eq!(
            paths.key_file(),
            PathBuf::from("/data/run/YOUR_KEY_IN_ENV_DONT_PUBLIC.txt")
        );
    }

    #[test]
    fn should_prefer_explicit_paths() {
        // Arrange
        let cli = Cli::try_parse_from([
            "rulegen",
            "--input",
            "in.csv",
            "--output",
            "/tmp/out.csv",
            "--rules-dir",
            "rules",
        ])
        .unwrap();

        // Act
        let paths = PathsConfig::from_cli(&cli);

        // Assert
        assert_eq!(paths.input, PathBuf::from("in.csv"));
        assert_eq!(paths.output, PathBuf::from("/tmp/out.csv"));
        assert_eq!(paths.rules_dir, PathBuf::from("rules"));
        assert_eq!(paths.builtins, PathBuf::from("./builtinfs.json"));
    }
}
