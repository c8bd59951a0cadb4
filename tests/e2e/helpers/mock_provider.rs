use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Language codes the mock endpoint accepts. Anything else gets a 404,
/// which is how the real translate endpoint rejects unknown codes.
const KNOWN_LANGUAGES: &[&str] = &["en", "es", "fr", "de", "it", "pt"];

/// Query parameters the mock cares about
#[derive(Clone, Debug, Deserialize)]
pub struct RecordedQuery {
    pub tl: String,
    pub q: String,
    pub ttsspeed: String,
}

#[derive(Clone, Default)]
struct ProviderState {
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<RecordedQuery>>>,
}

/// Local stand-in for the external speech provider
pub struct MockProvider {
    pub base_url: String,
    state: ProviderState,
}

impl MockProvider {
    pub async fn start() -> Self {
        let state = ProviderState::default();

        let app = Router::new()
            .route("/translate_tts", get(translate_tts))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock provider");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Number of synthesis requests the provider has served
    pub fn hit_count(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// The most recent synthesis request, if any
    pub fn last_query(&self) -> Option<RecordedQuery> {
        self.state.last_query.lock().unwrap().clone()
    }
}

async fn translate_tts(
    State(state): State<ProviderState>,
    Query(query): Query<RecordedQuery>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = Some(query.clone());

    if !KNOWN_LANGUAGES.contains(&query.tl.as_str()) {
        return (StatusCode::NOT_FOUND, Vec::new());
    }

    (StatusCode::OK, mock_audio_bytes())
}

/// Minimal valid MP3 frame (silence)
pub fn mock_audio_bytes() -> Vec<u8> {
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        0x00, 0x00, 0x00, 0x00, // Some padding
    ]
}
