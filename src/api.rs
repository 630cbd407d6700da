use axum::{
    body::Body,
    extract::{Extension, State},
    http::{HeaderName, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use uuid::Uuid;

use crate::ai::{self, prompts, AiConfig};
use crate::markup::{self, Section};
use crate::messages;
use crate::system_info::version_string;

/// Bounds on how many drinks one comparison may hold.
const MIN_BEVERAGES: usize = 2;
const MAX_BEVERAGES: usize = 10;

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
    #[serde(default)]
    location: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct CompareRequest {
    #[serde(default)]
    beverages: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CompareResponse {
    comparison: String,
    sections: Vec<Section>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

#[derive(Clone, Debug)]
struct RequestContext {
    request_id: String,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub rate_limit_per_second: Option<u64>,
}

#[derive(Debug)]
struct RateLimiter {
    limit: u64,
    window: Duration,
    timestamps: Mutex<VecDeque<Instant>>,
}

pub fn router(ai: Option<AiConfig>, config: ApiConfig) -> Router {
    let mut api = Router::new()
        .route("/api/chat", post(chat))
        .route("/api/compare", post(compare))
        .route("/api/health", get(health))
        .with_state(ai);

    if let Some(rate_limit) = config.rate_limit_per_second {
        let limiter = Arc::new(RateLimiter {
            limit: rate_limit,
            window: Duration::from_secs(1),
            timestamps: Mutex::new(VecDeque::new()),
        });
        let rate_limit_layer = middleware::from_fn_with_state(limiter, rate_limit_requests);
        api = api.layer(rate_limit_layer);
    }

    // Only the LLM-backed routes count against the rate limit.
    api.fallback_service(ServeDir::new("public"))
        .layer(middleware::from_fn(assign_request_id))
}

async fn chat(
    State(ai): State<Option<AiConfig>>,
    Extension(request): Extension<RequestContext>,
    Json(payload): Json<ChatRequest>,
) -> Response {
    let message = payload.message.trim();
    if message.is_empty() {
        tracing::debug!(request_id = %request.request_id, "Rejected chat request without message");
        return bad_request_response(messages::ERROR_MESSAGE_REQUIRED);
    }

    let Some(config) = ai else {
        tracing::warn!(request_id = %request.request_id, "Chat request but no LLM key configured");
        return misconfigured_response();
    };

    let location = payload
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty());
    let prompt = prompts::chat_prompt(message, location);

    match ai::generate(&config, &prompt).await {
        Ok(text) => {
            tracing::debug!(
                request_id = %request.request_id,
                reply_chars = text.len(),
                "Chat reply generated"
            );
            (StatusCode::OK, Json(ChatResponse { response: text })).into_response()
        }
        Err(err) => {
            tracing::error!(
                request_id = %request.request_id,
                error = %err,
                "Chat generation failed"
            );
            upstream_error_response()
        }
    }
}

async fn compare(
    State(ai): State<Option<AiConfig>>,
    Extension(request): Extension<RequestContext>,
    Json(payload): Json<CompareRequest>,
) -> Response {
    let beverages = normalize_beverages(&payload.beverages);
    if beverages.len() < MIN_BEVERAGES {
        tracing::debug!(
            request_id = %request.request_id,
            count = beverages.len(),
            "Rejected comparison with too few beverages"
        );
        return bad_request_response(messages::ERROR_NOT_ENOUGH_BEVERAGES);
    }
    if beverages.len() > MAX_BEVERAGES {
        tracing::debug!(
            request_id = %request.request_id,
            count = beverages.len(),
            "Rejected comparison with too many beverages"
        );
        return bad_request_response(messages::ERROR_TOO_MANY_BEVERAGES);
    }

    let Some(config) = ai else {
        tracing::warn!(request_id = %request.request_id, "Compare request but no LLM key configured");
        return misconfigured_response();
    };

    let prompt = prompts::compare_prompt(&beverages);

    match ai::generate(&config, &prompt).await {
        Ok(comparison) => {
            let sections = markup::parse_sections(&markup::clean_markdown(&comparison));
            tracing::debug!(
                request_id = %request.request_id,
                beverage_count = beverages.len(),
                section_count = sections.len(),
                "Comparison generated"
            );
            (
                StatusCode::OK,
                Json(CompareResponse {
                    comparison,
                    sections,
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(
                request_id = %request.request_id,
                error = %err,
                "Comparison generation failed"
            );
            upstream_error_response()
        }
    }
}

async fn health() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            version: version_string(),
        }),
    )
        .into_response()
}

/// Trim entries and drop the blank ones before counting.
fn normalize_beverages(beverages: &[String]) -> Vec<String> {
    beverages
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

async fn assign_request_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    let status = response.status();
    let mut response = response;
    let header_value = match request_id.parse() {
        Ok(value) => value,
        Err(_) => {
            return response;
        }
    };
    response
        .headers_mut()
        .insert(HeaderName::from_static("x-request-id"), header_value);
    tracing::debug!(
        request_id,
        method = %method,
        uri = %uri,
        status = %status,
        "Request completed"
    );
    response
}

async fn rate_limit_requests(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let request_id = req
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.request_id.as_str())
        .unwrap_or("unknown");
    let now = Instant::now();
    let mut timestamps = limiter.timestamps.lock().await;
    while let Some(ts) = timestamps.front() {
        if now.duration_since(*ts) >= limiter.window {
            timestamps.pop_front();
        } else {
            break;
        }
    }

    if timestamps.len() as u64 >= limiter.limit {
        tracing::debug!(request_id, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: messages::ERROR_RATE_LIMITED,
            }),
        )
            .into_response();
    }
    timestamps.push_back(now);
    drop(timestamps);
    next.run(req).await
}

fn bad_request_response(error: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

fn misconfigured_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: messages::ERROR_NO_API_KEY,
        }),
    )
        .into_response()
}

fn upstream_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: messages::ERROR_UPSTREAM,
        }),
    )
        .into_response()
}
