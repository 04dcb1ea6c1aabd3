use anyhow::Result;
use tracing_subscriber::EnvFilter;

use lumina::config::AppConfig;
use lumina::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; enhancement requests will be rejected until it is provided"
        );
    }

    web::run(config).await
}
