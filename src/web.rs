mod enhance;
mod error;

pub use error::{ApiError, ErrorBody};

use std::sync::Arc;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use genai::GeminiClient;

use crate::config::AppConfig;
use crate::constants::MAX_BODY_BYTES;

/// Shared state for the request handlers. The Gemini client exists only when
/// a credential was configured; without it, enhancement requests fail fast
/// before any network activity.
pub struct AppState {
    pub client: Option<GeminiClient>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let client = config
            .api_key
            .as_deref()
            .map(|key| GeminiClient::new(key, &config.endpoint, &config.model));
        Self { client }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthcheck", get(|| async { "OK" }))
        .route("/api/enhance", post(enhance::enhance_image))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
        .layer(cors)
}

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(&config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!(addr = %config.listen_addr, model = %config.model, "listening");

    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;
    Ok(())
}
