use serial_test::serial;
use sipcompare::ai::{AiConfig, Provider};
use sipcompare::Config;

fn clear_env() {
    for key in [
        "GEMINI_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_API_URL",
        "GROQ_API_KEY",
        "GROQ_MODEL",
        "GROQ_API_URL",
        "BIND_ADDR",
        "API_RATE_LIMIT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn ai_config_from_env_missing_keys() {
    clear_env();
    assert!(AiConfig::from_env().is_none());
}

#[test]
#[serial]
fn ai_config_from_env_gemini_defaults() {
    clear_env();
    std::env::set_var("GEMINI_API_KEY", "k");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.provider, Provider::Gemini);
    assert_eq!(cfg.api_key, "k");
    assert_eq!(cfg.model, "gemini-2.0-flash");
    assert!(cfg.api_url.is_none());
}

#[test]
#[serial]
fn ai_config_from_env_groq_fallback() {
    clear_env();
    std::env::set_var("GROQ_API_KEY", "g");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.provider, Provider::Groq);
    assert_eq!(cfg.model, "llama-3.3-70b-versatile");
}

#[test]
#[serial]
fn ai_config_from_env_prefers_gemini() {
    clear_env();
    std::env::set_var("GEMINI_API_KEY", "k");
    std::env::set_var("GROQ_API_KEY", "g");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.provider, Provider::Gemini);
}

#[test]
#[serial]
fn ai_config_from_env_custom_model_and_url() {
    clear_env();
    std::env::set_var("GEMINI_API_KEY", "k");
    std::env::set_var("GEMINI_MODEL", "gemini-test");
    std::env::set_var("GEMINI_API_URL", "http://localhost:1/generate");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.model, "gemini-test");
    assert_eq!(cfg.api_url.as_deref(), Some("http://localhost:1/generate"));
}

#[test]
#[serial]
fn config_from_env_defaults() {
    clear_env();
    let cfg = Config::from_env();
    assert_eq!(cfg.bind_addr, "127.0.0.1:3000");
    assert!(cfg.ai.is_none());
    assert!(cfg.api.rate_limit_per_second.is_none());
}

#[test]
#[serial]
fn config_from_env_overrides() {
    clear_env();
    std::env::set_var("BIND_ADDR", "0.0.0.0:8080");
    std::env::set_var("API_RATE_LIMIT", "5");
    std::env::set_var("GROQ_API_KEY", "g");
    let cfg = Config::from_env();
    assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
    assert_eq!(cfg.api.rate_limit_per_second, Some(5));
    assert_eq!(cfg.ai.unwrap().provider, Provider::Groq);
}

#[test]
#[serial]
fn config_ignores_unparseable_rate_limit() {
    clear_env();
    std::env::set_var("API_RATE_LIMIT", "lots");
    let cfg = Config::from_env();
    assert!(cfg.api.rate_limit_per_second.is_none());
}
