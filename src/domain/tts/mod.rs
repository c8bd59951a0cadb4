pub mod error;
pub mod service;
pub mod temp_audio;

pub use error::TtsServiceError;
use serde::{Deserialize, Serialize};
pub use service::{TtsAudio, TtsService, TtsServiceApi};
pub use temp_audio::TempAudioFile;

/// Request for POST /api/text-to-speech
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub slow: bool,
}

fn default_language() -> String {
    "en".to_string()
}
