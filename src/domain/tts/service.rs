use super::error::TtsServiceError;
use super::temp_audio::TempAudioFile;
use super::TtsRequest;
use crate::infrastructure::synthesis::SpeechSynthesizer;
use async_trait::async_trait;
use std::sync::Arc;

/// Result of a synthesis call: the fully buffered MP3 payload
#[derive(Debug, Clone)]
pub struct TtsAudio {
    pub audio_data: Vec<u8>,
}

pub struct TtsService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl TtsService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech
    ///
    /// This operation:
    /// - Rejects text that is empty after trimming, before any other work
    /// - Calls the external speech provider to completion
    /// - Buffers the audio through a uniquely named temp file that is
    ///   removed on every exit path
    ///
    /// Returns the complete MP3 payload
    async fn synthesize(&self, request: TtsRequest) -> Result<TtsAudio, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: TtsRequest) -> Result<TtsAudio, TtsServiceError> {
        // 1. Validate before touching the provider or the filesystem
        if request.text.trim().is_empty() {
            return Err(TtsServiceError::EmptyText);
        }

        tracing::info!(
            text_length = request.text.len(),
            language = %request.language,
            slow = request.slow,
            "TTS synthesis request"
        );

        // 2. Acquire the transient file. The guard deletes it when this
        // scope exits, on the success and failure paths alike.
        let temp = TempAudioFile::create()?;

        // 3. Run synthesis to completion. The language is passed through
        // unvalidated, the provider is the authority on supported codes.
        let audio = self
            .synthesizer
            .synthesize(&request.text, &request.language, request.slow)
            .await
            .map_err(|e| TtsServiceError::Provider(e.to_string()))?;

        // 4. Persist the payload, then read it back for the response
        temp.write(&audio).await?;
        let audio_data = temp.read().await?;

        tracing::info!(
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(TtsAudio { audio_data })
    }
}
