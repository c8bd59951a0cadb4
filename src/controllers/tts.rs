use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{TtsRequest, TtsService, TtsServiceApi},
    error::AppResult,
};

/// Filename suggested to the client for the downloaded audio
const DOWNLOAD_FILENAME: &str = "generated_speech.mp3";

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/text-to-speech - Convert text to speech
    pub async fn generate_speech(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let result = controller.tts_service.synthesize(request).await?;

        // Build headers
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME)
                .parse()
                .unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}
