use super::error::TtsServiceError;
use super::language::{detect_language, LanguageCode};
use crate::domain::artifact::{Artifact, ArtifactStore};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub audio_data: Vec<u8>,
    pub artifact: Artifact,
    pub language: LanguageCode,
    pub char_count: usize,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    artifact_store: Arc<ArtifactStore>,
    retention: Duration,
}

impl TtsService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        artifact_store: Arc<ArtifactStore>,
        retention: Duration,
    ) -> Self {
        Self {
            tts_repo,
            artifact_store,
            retention,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Convert text to speech and persist the result.
    ///
    /// One interaction:
    /// - Resolves the synthesis language (explicit code or detection)
    /// - Calls the speech provider; the returned bytes are opaque MP3
    /// - Stores the bytes as a named artifact
    /// - Runs a best-effort retention sweep over the artifact directory
    ///
    /// Provider and storage failures abort the interaction; sweep failures
    /// never do.
    async fn synthesize(
        &self,
        text: String,
        language: Option<String>,
        slow: bool,
    ) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: String,
        language: Option<String>,
        slow: bool,
    ) -> Result<TtsSynthesisResult, TtsServiceError> {
        tracing::info!(
            text_length = text.len(),
            slow,
            requested_language = language.as_deref().unwrap_or("auto"),
            "TTS synthesis request"
        );

        // 1. Resolve the synthesis language
        let language = resolve_language(language.as_deref(), &text)?;

        // 2. Call the provider
        let audio_data = self
            .tts_repo
            .synthesize(&text, language, slow)
            .await
            .map_err(TtsServiceError::Synthesis)?;

        // 3. Persist the payload under a derived name
        let artifact = self.artifact_store.create(&text, &audio_data).await?;

        // 4. Retention pass; failures are already logged inside the store
        let report = self.artifact_store.sweep(self.retention).await;
        tracing::debug!(
            scanned = report.scanned,
            removed = report.removed,
            failed = report.failed,
            "Retention sweep completed"
        );

        let char_count = text.chars().count();

        tracing::info!(
            artifact = %artifact.name,
            audio_size_bytes = audio_data.len(),
            language = %language,
            char_count,
            "TTS synthesis completed"
        );

        Ok(TtsSynthesisResult {
            audio_data,
            artifact,
            language,
            char_count,
        })
    }
}

/// An explicit code must parse; absent or "auto" falls back to detection.
fn resolve_language(requested: Option<&str>, text: &str) -> Result<LanguageCode, TtsServiceError> {
    match requested {
        None => Ok(detect_language(text)),
        Some("auto") => Ok(detect_language(text)),
        Some(code) => LanguageCode::from_code(code)
            .ok_or_else(|| TtsServiceError::Invalid(format!("unsupported language code: {code}"))),
    }
}
