//! Completion provider implementations
//!
//! Each provider is implemented in its own module.

pub mod anthropic;
pub mod openai;

// Re-export providers for easy access
pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;

use crate::error::{NameForgeError, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client shared by the providers' constructors
pub(crate) fn http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| NameForgeError::network(e.to_string(), None, None))
}

/// Map a non-success status to a readable network error
pub(crate) fn status_error(provider: &str, status: reqwest::StatusCode, body: String, url: String) -> NameForgeError {
    let message = match status.as_u16() {
        401 => format!("Authentication failed (401). Please check your {} API key", provider),
        403 => "Access forbidden (403). Your API key may not have permission for this endpoint".to_string(),
        429 => "Rate limit exceeded (429). Please try again later".to_string(),
        500..=599 => format!("Server error ({}). The {} API is experiencing issues", status, provider),
        _ => format!("{} API request failed ({}): {}", provider, status, body),
    };
    NameForgeError::network(message, Some(status.as_u16()), Some(url))
}
