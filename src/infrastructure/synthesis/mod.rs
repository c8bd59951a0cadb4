pub mod google_translate;

pub use google_translate::GoogleTranslateSynthesizer;

use async_trait::async_trait;

/// Client for an external speech synthesis engine.
/// Abstracts the underlying provider behind a single call.
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single audio stream
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize text to speech for a given language
    ///
    /// Returns merged audio data ready for playback (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The text to synthesize, guaranteed non-empty by the caller
    /// * `language` - Language code, forwarded to the provider unvalidated
    /// * `slow` - Whether to read at reduced speed
    ///
    /// # Errors
    /// Returns an error if the provider is unreachable or rejects the input,
    /// for example an unsupported language code
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
    ) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("speech provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("speech provider returned status {status} for language '{language}'")]
    Upstream { status: u16, language: String },
}
