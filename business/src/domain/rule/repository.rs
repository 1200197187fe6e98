use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Builtin, RuleExample};

/// Source of the RSL knowledge fed to the rule author: built-in functions and rule examples.
#[async_trait]
pub trait RuleContextRepository: Send + Sync {
    async fn load_builtins(&self) -> Result<Vec<Builtin>, RepositoryError>;
    async fn load_examples(&self) -> Result<Vec<RuleExample>, RepositoryError>;
}
