pub mod config;
pub mod gemini;
pub mod groq;
pub mod prompts;

pub use config::{AiConfig, Provider};

use anyhow::Result;

/// Forward a prompt to whichever provider is configured and return the
/// generated text.
pub async fn generate(config: &AiConfig, prompt: &str) -> Result<String> {
    match config.provider {
        Provider::Gemini => {
            gemini::generate(
                &config.api_key,
                &config.model,
                prompt,
                config.api_url.as_deref(),
            )
            .await
        }
        Provider::Groq => {
            groq::generate(
                &config.api_key,
                &config.model,
                prompt,
                config.api_url.as_deref(),
            )
            .await
        }
    }
}
