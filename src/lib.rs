use anyhow::Result;
use dotenvy::dotenv;

pub mod ai;
pub mod api;
mod config;
pub mod markup;
pub mod messages;
mod system_info;

pub use api::{router, ApiConfig};
pub use config::Config;
pub use system_info::version_string;

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting beverage comparison server...");

    let config = Config::from_env();

    match &config.ai {
        Some(ai) => tracing::info!(provider = ?ai.provider, model = %ai.model, "LLM backend configured"),
        None => tracing::warn!(
            "No GEMINI_API_KEY or GROQ_API_KEY set; chat and compare requests will be rejected"
        ),
    }

    let app = api::router(config.ai.clone(), config.api.clone());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
