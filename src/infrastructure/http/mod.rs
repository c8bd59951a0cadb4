use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;

pub mod request_id;
pub use request_id::request_id_middleware;

/// Build the application router with all routes and middleware configured
pub fn build_router(config: &Config, tts_controller: Arc<TtsController>) -> Router {
    let tts_routes = Router::new()
        .route(
            "/api/text-to-speech",
            post(TtsController::generate_speech),
        )
        .with_state(tts_controller);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy for the browser frontends listed in configuration.
/// Explicit method and header lists, wildcards cannot be combined with
/// credentials.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
