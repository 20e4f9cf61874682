use crate::domain::artifact::ArtifactStoreError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("synthesis failed: {0}")]
    Synthesis(String),
    #[error("artifact storage failed: {0}")]
    Storage(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ArtifactStoreError> for TtsServiceError {
    fn from(err: ArtifactStoreError) -> Self {
        TtsServiceError::Storage(err.to_string())
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Synthesis(msg) => AppError::Synthesis(msg),
            TtsServiceError::Storage(msg) => AppError::Storage(msg),
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
