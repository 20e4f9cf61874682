use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{SynthesizeRequest, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

/// Practical input ceiling; the provider degrades well before this
const MAX_TEXT_CHARS: usize = 5000;

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts/synthesize - Convert text to speech
    ///
    /// Returns the MP3 payload with the stored artifact name as the
    /// suggested download filename.
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        // Validate input before anything else runs
        if request.text.trim().is_empty() {
            return Err(AppError::BadRequest("Text cannot be empty".to_string()));
        }

        let char_count = request.text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(AppError::PayloadTooLarge(format!(
                "Text must be {MAX_TEXT_CHARS} characters or less"
            )));
        }

        let result = controller
            .tts_service
            .synthesize(
                request.text,
                request.language,
                request.slow.unwrap_or(false),
            )
            .await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", result.artifact.name)
                .parse()
                .unwrap(),
        );
        headers.insert("X-Artifact-Name", result.artifact.name.parse().unwrap());
        headers.insert(
            "X-Character-Count",
            result.char_count.to_string().parse().unwrap(),
        );
        headers.insert("X-Language", result.language.to_string().parse().unwrap());

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}
