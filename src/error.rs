//! Error handling for name-forge

use thiserror::Error;

/// Main error type for name-forge
#[derive(Error, Debug, Clone)]
pub enum NameForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Remote generation error ({provider}): {message}")]
    Remote { provider: String, message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Word bank not found: {category}")]
    WordBankNotFound { category: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl NameForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a remote generation error
    pub fn remote(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a word bank lookup error
    pub fn word_bank_not_found(category: impl Into<String>) -> Self {
        Self::WordBankNotFound {
            category: category.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error came out of the completion service round trip.
    ///
    /// These are recovered by the template fallback and never reach the caller.
    pub fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            Self::Remote { .. } | Self::Network { .. } | Self::Parse { .. } | Self::Timeout { .. }
        )
    }

    /// HTTP status used when this error escapes the generation endpoint
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            _ => 500,
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for NameForgeError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::network("HTTP request timed out", status_code, url)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for NameForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for NameForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NameForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::NameForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NameForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::NameForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NameForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::NameForgeError::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NameForgeError::internal(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_failure_classification() {
        assert!(NameForgeError::remote("openai", "empty").is_remote_failure());
        assert!(NameForgeError::parse("bad json", None).is_remote_failure());
        assert!(NameForgeError::timeout("completion", 30).is_remote_failure());
        assert!(!NameForgeError::validation("batchSize").is_remote_failure());
        assert!(!NameForgeError::config("missing").is_remote_failure());
    }

    #[test]
    fn test_reqwest_errors_become_network_errors() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        let converted = NameForgeError::from(err);
        assert!(matches!(converted, NameForgeError::Network { .. }));
        assert!(!matches!(converted, NameForgeError::Timeout { .. }));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error!("batchNumber must be at least 1").status_code(), 400);
        assert_eq!(internal_error!("boom {}", 1).status_code(), 500);
    }
}
