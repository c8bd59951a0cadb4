use super::{SpeechSynthesizer, SynthesisError};
use async_trait::async_trait;
use reqwest::Client;

/// The translate endpoint rejects long inputs, keep each request small
const MAX_BATCH_SIZE: usize = 200;

/// Playback speed values understood by the endpoint
const SPEED_NORMAL: &str = "1";
const SPEED_SLOW: &str = "0.3";

/// Google Translate implementation of the speech synthesizer.
///
/// Talks to the public `translate_tts` endpoint, the same engine the
/// Translate web client uses for its listen button. The base URL is
/// configurable so tests can point the client at a local stand-in.
pub struct GoogleTranslateSynthesizer {
    client: Client,
    base_url: String,
}

impl GoogleTranslateSynthesizer {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
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

            // If adding this sentence would exceed the limit, save current batch
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

            // If we have a current batch and adding remaining would exceed limit
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

        // Add any remaining batch
        if !current_batch.is_empty() {
            batches.push(current_batch.trim().to_string());
        }

        batches
    }

    /// Fetch the MP3 audio for a single text batch
    async fn call_translate_tts(
        &self,
        batch: &str,
        language: &str,
        slow: bool,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, SynthesisError> {
        let url = format!("{}/translate_tts", self.base_url);
        let ttsspeed = if slow { SPEED_SLOW } else { SPEED_NORMAL };

        tracing::info!(
            language = language,
            ttsspeed = ttsspeed,
            batch_index = idx,
            batch_size = batch.len(),
            "Calling translate_tts"
        );

        let total_param = total.to_string();
        let idx_param = idx.to_string();
        let textlen_param = batch.len().to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("ttsspeed", ttsspeed),
                ("q", batch),
                ("total", total_param.as_str()),
                ("idx", idx_param.as_str()),
                ("textlen", textlen_param.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SynthesisError::Upstream {
                status: response.status().as_u16(),
                language: language.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
    ) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        // Split text into batches based on the endpoint's length limit
        let batches = self.split_into_batches(text);
        tracing::info!(
            batch_count = batches.len(),
            text_length = text.len(),
            "Text split into batches"
        );

        // Synthesize each batch and merge the MP3 chunks in order
        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self
                .call_translate_tts(batch, language, slow, index, batches.len())
                .await?;
            merged_audio.extend(audio_data);
        }

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "google_translate",
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}
