//! LLM (Large Language Model) integration module
//!
//! The completion service is an opaque collaborator: prompts in, text out.
//! `RemoteGenerator` turns that text into generated names.

pub mod prompt;
pub mod providers;
pub mod remote;

// Re-export main functionality
pub use remote::RemoteGenerator;

use crate::error::Result;
use crate::types::LlmConfig;
use async_trait::async_trait;

/// Core trait for all completion providers
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send a system/user prompt pair and return the raw completion text
    async fn complete(&self, system_prompt: &str, user_prompt: &str, temperature: f32) -> Result<String>;

    /// Get provider name
    fn name(&self) -> &'static str;

    /// Get model name being used
    fn model(&self) -> &str;

    /// Highest sampling temperature the provider accepts
    fn max_temperature(&self) -> f32 {
        2.0
    }

    /// Check if provider is configured and ready
    fn is_ready(&self) -> bool;
}

/// Get available completion providers
pub fn available_providers() -> Vec<&'static str> {
    vec!["openai", "anthropic"]
}

/// Create a completion provider from configuration
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn CompletionService>> {
    match config.provider.as_str() {
        "openai" => Ok(Box::new(providers::OpenAiProvider::new(config)?)),
        "anthropic" => Ok(Box::new(providers::AnthropicProvider::new(config)?)),
        _ => Err(crate::error::NameForgeError::config(format!(
            "Unsupported LLM provider: {}. Supported providers: {}",
            config.provider,
            available_providers().join(", ")
        ))),
    }
}
