//! Anthropic provider implementation
//!
//! Supports Anthropic's Claude API

use crate::error::{NameForgeError, Result};
use crate::llm::CompletionService;
use crate::types::LlmConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{http_client, status_error};

/// Anthropic provider implementation
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(NameForgeError::config("Anthropic API key is required"));
        }

        Ok(Self {
            client: http_client(config.timeout_secs)?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "https://api.anthropic.com/v1".to_string()),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionService for AnthropicProvider {
    async fn complete(&self, system_prompt: &str, user_prompt: &str, temperature: f32) -> Result<String> {
        let request = AnthropicRequest {
            model: &self.model,
            system: system_prompt,
            messages: vec![AnthropicMessage {
                role: "user",
                content: user_prompt,
            }],
            temperature,
            max_tokens: self.max_tokens,
        };

        let url = format!("{}/messages", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                NameForgeError::network(
                    format!("Failed to connect to Anthropic API: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error("Anthropic", status, error_text, url));
        }

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| NameForgeError::parse(e.to_string(), None))?;

        let text: String = anthropic_response
            .content
            .into_iter()
            .filter_map(|block| block.text)
            .collect();

        if text.trim().is_empty() {
            return Err(NameForgeError::remote("anthropic", "No content in completion response"));
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_temperature(&self) -> f32 {
        1.0
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// Anthropic API structures
#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContent>,
}

#[derive(Deserialize)]
struct AnthropicContent {
    #[serde(default)]
    text: Option<String>,
}
