use crate::domain::tts::LanguageCode;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying speech provider.
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single audio stream
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given language
    ///
    /// Returns merged audio data ready for playback (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The text to synthesize, passed verbatim
    /// * `language` - The target language for synthesis
    /// * `slow` - Whether to request the provider's slow voice speed
    ///
    /// # Errors
    /// Returns error if synthesis fails or the provider is unreachable
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
        slow: bool,
    ) -> Result<Vec<u8>, String>;
}
