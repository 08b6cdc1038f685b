//! Environment configuration and logging bootstrap

use std::env;
use std::str::FromStr;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{NameForgeError, Result};
use crate::types::LlmConfig;

/// Server and provider settings read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// `None` runs the service in fallback-only mode
    pub llm: Option<LlmConfig>,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(get("PORT"), "PORT", 3000u16)?;
        let log_level = get("LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let timeout_secs = parse_or(get("REMOTE_TIMEOUT_SECS"), "REMOTE_TIMEOUT_SECS", 30u64)?;
        let max_tokens = parse_or(get("MAX_TOKENS"), "MAX_TOKENS", 1000u32)?;

        let openai = get("OPENAI_API_KEY").map(|api_key| LlmConfig {
            provider: "openai".to_string(),
            model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-3.5-turbo".to_string()),
            api_key,
            base_url: get("OPENAI_BASE_URL"),
            timeout_secs,
            max_tokens,
        });
        let anthropic = get("ANTHROPIC_API_KEY").map(|api_key| LlmConfig {
            provider: "anthropic".to_string(),
            model: get("ANTHROPIC_MODEL").unwrap_or_else(|| "claude-3-5-haiku-latest".to_string()),
            api_key,
            base_url: get("ANTHROPIC_BASE_URL"),
            timeout_secs,
            max_tokens,
        });

        let llm = match get("LLM_PROVIDER").map(|p| p.to_lowercase()).as_deref() {
            None => openai.or(anthropic),
            Some("openai") => Some(openai.ok_or_else(|| {
                NameForgeError::config("LLM_PROVIDER is openai but OPENAI_API_KEY is not set")
            })?),
            Some("anthropic") => Some(anthropic.ok_or_else(|| {
                NameForgeError::config("LLM_PROVIDER is anthropic but ANTHROPIC_API_KEY is not set")
            })?),
            Some("none") => None,
            Some(other) => {
                return Err(crate::config_error!(
                    "Unsupported LLM_PROVIDER: {}. Supported providers: {}",
                    other,
                    crate::llm::available_providers().join(", ")
                ))
            }
        };

        Ok(Self {
            host,
            port,
            log_level,
            llm,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> Result<T> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| crate::config_error!("Invalid value for {}: {}", key, raw)),
    }
}

/// Initialize the tracing subscriber with console output
pub fn init_logging(log_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(log_level)
        .map_err(|e| crate::config_error!("Invalid log level {}: {}", log_level, e))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|e| crate::config_error!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_keys() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert!(config.llm.is_none());
    }

    #[test]
    fn test_openai_preferred_when_both_keys_present() {
        let config = load(&[("OPENAI_API_KEY", "sk-1"), ("ANTHROPIC_API_KEY", "ak-1")]).unwrap();
        let llm = config.llm.unwrap();
        assert_eq!(llm.provider, "openai");
        assert_eq!(llm.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_explicit_provider_choice() {
        let config = load(&[
            ("OPENAI_API_KEY", "sk-1"),
            ("ANTHROPIC_API_KEY", "ak-1"),
            ("LLM_PROVIDER", "anthropic"),
            ("REMOTE_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        let llm = config.llm.unwrap();
        assert_eq!(llm.provider, "anthropic");
        assert_eq!(llm.timeout_secs, 5);

        assert!(load(&[("LLM_PROVIDER", "openai")]).is_err());
        assert!(load(&[("OPENAI_API_KEY", "sk-1"), ("LLM_PROVIDER", "none")])
            .unwrap()
            .llm
            .is_none());
    }

    #[test]
    fn test_invalid_numbers_are_config_errors() {
        assert!(matches!(
            load(&[("PORT", "eighty")]),
            Err(NameForgeError::Config { .. })
        ));
        assert!(load(&[("MAX_TOKENS", "-1")]).is_err());
    }
}
