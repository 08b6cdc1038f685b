//! Name Forge - name generation for businesses, babies, pets and hashtags
//!
//! Names come from a remote completion service when one is configured, and
//! from template word banks otherwise.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod service;
pub mod types;
pub mod words;

// Re-export commonly used types
pub use error::{NameForgeError, Result};
pub use types::{
    Category, Filters, GeneratedName, GenerationRequest, GenerationResponse, GenerationSource,
    LlmConfig,
};

// Re-export main functionality
pub use client::{GeneratorClient, NameList};
pub use config::AppConfig;
pub use generator::BatchGenerator;
pub use llm::{CompletionService, RemoteGenerator};
pub use service::GenerationService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
