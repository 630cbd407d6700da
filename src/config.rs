use std::env;

use crate::ai::AiConfig;
use crate::api::ApiConfig;

/// Default listen address when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone)]
pub struct Config {
    pub bind_addr: String,
    pub ai: Option<AiConfig>,
    pub api: ApiConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let api = ApiConfig {
            rate_limit_per_second: env::var("API_RATE_LIMIT").ok().and_then(|v| v.parse().ok()),
        };
        let ai = AiConfig::from_env();
        Self {
            bind_addr,
            ai,
            api,
        }
    }
}
