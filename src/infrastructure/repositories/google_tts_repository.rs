use super::tts_repository::TtsRepository;
use crate::domain::tts::LanguageCode;
use async_trait::async_trait;

/// The public translate endpoint rejects requests much over 100 characters
const MAX_BATCH_SIZE: usize = 100;

const ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Values understood by the endpoint's `ttsspeed` parameter
const SPEED_NORMAL: &str = "1";
const SPEED_SLOW: &str = "0.24";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Google Translate TTS implementation of the TTS repository.
///
/// Uses the unauthenticated endpoint; each request carries at most one
/// ~100-character batch and the MP3 chunks are concatenated in order.
pub struct GoogleTtsRepository {
    client: reqwest::Client,
}

impl GoogleTtsRepository {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Split text into batches that respect sentence boundaries
    /// Each batch is at most MAX_BATCH_SIZE characters
    fn split_into_batches(&self, text: &str) -> Vec<String> {
        if text.len() <= MAX_BATCH_SIZE {
            return vec![text.to_string()];
        }

        let mut batches = Vec::new();
        let mut current_batch = String::new();

        // Split on sentence-ending punctuation
        let sentence_pattern = regex::Regex::new(r"([.!?]+\s+)").unwrap();
        let mut last_end = 0;

        for mat in sentence_pattern.find_iter(text) {
            let sentence = &text[last_end..mat.end()];

            if !current_batch.is_empty() && current_batch.len() + sentence.len() > MAX_BATCH_SIZE {
                batches.push(current_batch.trim().to_string());
                current_batch = String::new();
            }

            current_batch.push_str(sentence);
            last_end = mat.end();
        }

        // Handle remaining text after last sentence boundary
        if last_end < text.len() {
            let remaining = &text[last_end..];

            if !current_batch.is_empty() && current_batch.len() + remaining.len() > MAX_BATCH_SIZE {
                batches.push(current_batch.trim().to_string());
                current_batch = String::new();
            }

            // If remaining text itself is too large, split it by characters
            if remaining.len() > MAX_BATCH_SIZE {
                let chars: Vec<char> = remaining.chars().collect();
                for chunk in chars.chunks(MAX_BATCH_SIZE) {
                    batches.push(chunk.iter().collect());
                }
            } else {
                current_batch.push_str(remaining);
            }
        }

        if !current_batch.is_empty() {
            batches.push(current_batch.trim().to_string());
        }

        batches
    }

    /// Call the endpoint for a single text batch
    async fn call_endpoint(
        &self,
        text: &str,
        language: LanguageCode,
        slow: bool,
    ) -> Result<Vec<u8>, String> {
        let url = format!(
            "{}?ie=UTF-8&client=tw-ob&tl={}&ttsspeed={}&q={}",
            ENDPOINT,
            language.as_str(),
            if slow { SPEED_SLOW } else { SPEED_NORMAL },
            urlencoding::encode(text)
        );

        tracing::info!(
            language = %language,
            slow,
            text_length = text.len(),
            "Calling Google Translate TTS"
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Referer", "https://translate.google.com/")
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    language = %language,
                    text_length = text.len(),
                    "Google Translate TTS request failed"
                );
                format!("Google TTS request failed: {e}")
            })?;

        if !response.status().is_success() {
            tracing::error!(
                status = %response.status(),
                language = %language,
                "Google Translate TTS returned an error status"
            );
            return Err(format!("Google TTS error: {}", response.status()));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read audio stream: {e}"))?;

        tracing::debug!(
            audio_size = audio_bytes.len(),
            "Audio chunk received"
        );

        Ok(audio_bytes.to_vec())
    }

    /// Synthesize multiple text batches and merge the audio results in order
    async fn synthesize_batches(
        &self,
        batches: &[String],
        language: LanguageCode,
        slow: bool,
    ) -> Result<Vec<u8>, String> {
        let mut merged_audio = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            tracing::debug!(
                batch_index = index,
                batch_size = batch.len(),
                "Synthesizing batch"
            );

            let audio_data = self.call_endpoint(batch, language, slow).await?;
            merged_audio.extend(audio_data);
        }

        Ok(merged_audio)
    }
}

impl Default for GoogleTtsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
        slow: bool,
    ) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = self.split_into_batches(text);
        tracing::info!(
            batch_count = batches.len(),
            text_length = text.len(),
            "Text split into batches"
        );

        let audio_data = self.synthesize_batches(&batches, language, slow).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "google_translate",
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
