use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("artifact directory unavailable: {0}")]
    Directory(#[source] std::io::Error),

    #[error("failed to write artifact: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to read artifact store: {0}")]
    Read(#[from] std::io::Error),

    #[error("artifact not found: {0}")]
    NotFound(String),

    #[error("invalid artifact name: {0}")]
    InvalidName(String),
}

impl From<ArtifactStoreError> for AppError {
    fn from(err: ArtifactStoreError) -> Self {
        match err {
            ArtifactStoreError::NotFound(name) => AppError::NotFound(format!("artifact {name}")),
            ArtifactStoreError::InvalidName(msg) => AppError::BadRequest(msg),
            ArtifactStoreError::Directory(_)
            | ArtifactStoreError::Write(_)
            | ArtifactStoreError::Read(_) => AppError::Storage(err.to_string()),
        }
    }
}
