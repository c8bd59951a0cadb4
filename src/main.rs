use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_backend::controllers::tts::TtsController;
use tts_backend::domain::tts::TtsService;
use tts_backend::infrastructure::config::{Config, LogFormat};
use tts_backend::infrastructure::http::start_http_server;
use tts_backend::infrastructure::synthesis::GoogleTranslateSynthesizer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TTS Backend on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // Speech provider client
    let http_client = reqwest::Client::new();
    let synthesizer = Arc::new(GoogleTranslateSynthesizer::new(
        http_client,
        config.tts_base_url.clone(),
    ));
    tracing::info!(base_url = %config.tts_base_url, "Speech synthesizer initialized");

    // Service and controller
    let tts_service = Arc::new(TtsService::new(synthesizer));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    // Start HTTP server with all routes
    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
