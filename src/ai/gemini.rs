//! Client for the Gemini `generateContent` endpoint.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: String,
}

/// Send a prompt through `generateContent` and return the reply text.
#[instrument(level = "trace", skip(api_key, prompt))]
pub async fn generate(
    api_key: &str,
    model: &str,
    prompt: &str,
    url: Option<&str>,
) -> Result<String> {
    let url = match url {
        Some(url) => url.to_string(),
        None => format!("{GEMINI_API_BASE}/{model}:generateContent"),
    };
    debug!(url = %url, "sending generateContent request");

    let body = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
    };

    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, body = %err_text, "Gemini API error");
        return Err(anyhow!("Gemini API error {status}: {err_text}"));
    }

    let raw = resp.text().await?;
    trace!(raw = %raw, "generateContent response");
    let reply: GenerateResponse = serde_json::from_str(&raw)?;

    let text = reply
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .ok_or_else(|| anyhow!("missing candidate text"))?
        .text
        .trim()
        .to_string();

    Ok(text)
}
