/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.read_failed: {0}")]
    ReadFailed(String),
    #[error("repository.write_failed: {0}")]
    WriteFailed(String),
    #[error("repository.malformed: {0}")]
    Malformed(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn read_failed(cause: impl std::fmt::Display) -> Self {
        RepositoryError::ReadFailed(cause.to_string())
    }
    pub fn write_failed(cause: impl std::fmt::Display) -> Self {
        RepositoryError::WriteFailed(cause.to_string())
    }
    pub fn malformed(cause: impl std::fmt::Display) -> Self {
        RepositoryError::Malformed(cause.to_string())
    }
}
