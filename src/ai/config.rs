use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    Groq,
}

#[derive(Clone)]
pub struct AiConfig {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    /// Full endpoint override, mainly for tests.
    pub api_url: Option<String>,
}

impl AiConfig {
    /// Pick a provider from the environment. Gemini wins when both keys are
    /// set; no key at all means the AI features are disabled.
    pub fn from_env() -> Option<Self> {
        if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            return Some(Self {
                provider: Provider::Gemini,
                api_key,
                model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
                api_url: env::var("GEMINI_API_URL").ok(),
            });
        }
        if let Ok(api_key) = env::var("GROQ_API_KEY") {
            return Some(Self {
                provider: Provider::Groq,
                api_key,
                model: env::var("GROQ_MODEL")
                    .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
                api_url: env::var("GROQ_API_URL").ok(),
            });
        }
        None
    }
}
