//! Client for Groq's OpenAI-compatible chat completions endpoint.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

pub const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatTurn<'a>>,
}

#[derive(Serialize)]
struct ChatTurn<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// Send a prompt as a single user turn and return the reply text.
#[instrument(level = "trace", skip(api_key, prompt))]
pub async fn generate(
    api_key: &str,
    model: &str,
    prompt: &str,
    url: Option<&str>,
) -> Result<String> {
    let url = url.unwrap_or(GROQ_CHAT_URL);
    debug!(url, "sending chat completion request");

    let body = ChatRequest {
        model,
        messages: vec![ChatTurn {
            role: "user",
            content: prompt,
        }],
    };

    let client = reqwest::Client::new();
    let resp = client.post(url).bearer_auth(api_key).json(&body).send().await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, body = %err_text, "Groq API error");
        return Err(anyhow!("Groq API error {status}: {err_text}"));
    }

    let raw = resp.text().await?;
    trace!(raw = %raw, "chat response");
    let chat: ChatResponse = serde_json::from_str(&raw)?;

    let content = chat
        .choices
        .first()
        .ok_or_else(|| anyhow!("missing chat choice"))?
        .message
        .content
        .trim()
        .to_string();

    Ok(content)
}
