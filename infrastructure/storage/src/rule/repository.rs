use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;

use business::domain::errors::RepositoryError;
use business::domain::rule::model::{Builtin, RuleExample};
use business::domain::rule::repository::RuleContextRepository;

use crate::files::read_optional;

#[derive(Deserialize)]
struct BuiltinsFile {
    #[serde(default)]
    builtinfs: Vec<Builtin>,
}

/// Built-ins from `builtinfs.json` and rule examples from a directory of `.txt` files.
/// Missing, unreadable or malformed sources read as empty.
pub struct FsRuleContextRepository {
    builtins: PathBuf,
    rules_dir: PathBuf,
}

impl FsRuleContextRepository {
    pub fn new(builtins: PathBuf, rules_dir: PathBuf) -> Self {
        Self { builtins, rules_dir }
    }
}

#[async_trait]
impl RuleContextRepository for FsRuleContextRepository {
    async fn load_builtins(&self) -> Result<Vec<Builtin>, RepositoryError> {
        let bytes = match read_optional(&self.builtins).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::warn!(path = %self.builtins.display(), "Built-ins file not found");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::warn!(path = %self.builtins.display(), error = %e, "Could not read built-ins file");
                return Ok(Vec::new());
            }
        };
        match serde_json::from_slice::<BuiltinsFile>(&bytes) {
            Ok(file) => Ok(file.builtinfs),
            Err(e) => {
                tracing::warn!(path = %self.builtins.display(), error = %e, "Malformed built-ins file");
                Ok(Vec::new())
            }
        }
    }

    async fn load_examples(&self) -> Result<Vec<RuleExample>, RepositoryError> {
        let mut entries = match tokio::fs::read_dir(&self.rules_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.rules_dir.display(), "Rules directory not found");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::warn!(path = %self.rules_dir.display(), error = %e, "Could not list rules directory");
                return Ok(Vec::new());
            }
        };

        let mut paths = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "txt") {
                        paths.push(path);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(path = %self.rules_dir.display(), error = %e, "Rules directory listing stopped early");
                    break;
                }
            }
        }
        paths.sort();

        let mut examples = Vec::with_capacity(paths.len());
        for path in paths {
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => examples.push(RuleExample {
                    filename: path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    content,
                }),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable rule example"),
            }
        }
        Ok(examples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_read_builtins_under_builtinfs_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("builtinfs.json");
        std::fs::write(
            &path,
            r#"{"builtinfs": [{"name": "hasAnnotation", "purpose": "p", "return": "bool", "category": "query"}]}"#,
        )
        .unwrap();

        let builtins = FsRuleContextRepository::new(path, dir.path().join("rules"))
            .load_builtins()
            .await
            .unwrap();

        assert_eq!(builtins.len(), 1);
        assert_eq!(builtins[0].return_type.as_deref(), Some("bool"));
        assert_eq!(builtins[0].signature, None);
    }

    #[tokio::test]
    async fn should_read_txt_examples_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let rules = dir.path().join("rules");
        std::fs::create_dir(&rules).unwrap();
        std::fs::write(rules.join("b.txt"), "rule B { }").unwrap();
        std::fs::write(rules.join("a.txt"), "rule A { }").unwrap();
        std::fs::write(rules.join("notes.md"), "ignored").unwrap();

        let examples = FsRuleContextRepository::new(dir.path().join("builtinfs.json"), rules)
            .load_examples()
            .await
            .unwrap();

        let names: Vec<&str> = examples.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(examples[0].content, "rule A { }");
    }

    #[tokio::test]
    async fn should_treat_missing_sources_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FsRuleContextRepository::new(
            dir.path().join("builtinfs.json"),
            dir.path().join("rules"),
        );

        assert!(repository.load_builtins().await.unwrap().is_empty());
        assert!(repository.load_examples().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_degrade_to_empty_on_malformed_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("builtinfs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let builtins = FsRuleContextRepository::new(path, dir.path().join("rules"))
            .load_builtins()
            .await
            .unwrap();

        assert!(builtins.is_empty());
    }

    #[tokio::test]
    async fn should_degrade_to_empty_when_rules_dir_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let rules = dir.path().join("rules");
        std::fs::write(&rules, "not a directory").unwrap();

        let examples = FsRuleContextRepository::new(dir.path().join("builtinfs.json"), rules)
            .load_examples()
            .await
            .unwrap();

        assert!(examples.is_empty());
    }
}
