//! Remote name generation over a completion service

use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use super::prompt::{system_prompt, user_prompt};
use super::CompletionService;
use crate::error::{NameForgeError, Result};
use crate::types::{GeneratedName, GenerationRequest};

/// Sampling temperature of the first batch
pub const BASE_TEMPERATURE: f32 = 0.7;

/// Added per batch so later loads repeat less
pub const TEMPERATURE_STEP: f32 = 0.1;

/// Temperature for a batch, capped at what the provider accepts
pub fn temperature_for(batch_number: u32, max_temperature: f32) -> f32 {
    (BASE_TEMPERATURE + TEMPERATURE_STEP * batch_number as f32).min(max_temperature)
}

/// Asks the completion service for names and parses its answer.
///
/// A single attempt per call: any failure is returned to the caller, which
/// falls back to template generation.
#[derive(Clone)]
pub struct RemoteGenerator {
    service: Arc<dyn CompletionService>,
}

impl RemoteGenerator {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    pub fn provider_name(&self) -> &'static str {
        self.service.name()
    }

    pub fn model(&self) -> &str {
        self.service.model()
    }

    pub fn is_ready(&self) -> bool {
        self.service.is_ready()
    }

    /// Request one batch of names
    pub async fn request(&self, request: &GenerationRequest) -> Result<Vec<GeneratedName>> {
        let start_time = Instant::now();
        let system = system_prompt(request.category, request.batch_size);
        let user = user_prompt(request.category, &request.filters, request.batch_number);
        let temperature = temperature_for(request.batch_number, self.service.max_temperature());

        let content = self.service.complete(&system, &user, temperature).await?;
        let names = parse_names(&content, request.batch_size as usize)?;

        tracing::debug!(
            provider = %self.service.name(),
            model = %self.service.model(),
            category = %request.category,
            temperature,
            names_count = names.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "Remote completion parsed"
        );

        Ok(names)
    }
}

/// Loosely-typed entry as the model returns it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawName {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    meaning: Option<String>,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    seo_score: Option<f64>,
    #[serde(default)]
    available: Option<bool>,
    #[serde(default)]
    personality: Option<Vec<String>>,
}

impl From<RawName> for GeneratedName {
    fn from(raw: RawName) -> Self {
        GeneratedName {
            name: raw.name.trim().to_string(),
            description: raw.description,
            meaning: raw.meaning,
            origin: raw.origin,
            tags: raw.tags,
            seo_score: raw.seo_score.map(|s| s.round().clamp(0.0, 100.0) as u8),
            available: raw.available,
            personality: raw.personality,
        }
    }
}

/// Parse the completion text into at most `limit` uniquely-named entries.
///
/// The JSON array may be wrapped in prose or code fences. Entries without a
/// name are dropped; ending up with nothing is an error.
pub fn parse_names(content: &str, limit: usize) -> Result<Vec<GeneratedName>> {
    let (start, end) = match (content.find('['), content.rfind(']')) {
        (Some(start), Some(end)) if start < end => (start, end + 1),
        _ => {
            return Err(NameForgeError::parse(
                "No JSON array in completion response",
                Some(content.to_string()),
            ))
        }
    };
    let json_content = &content[start..end];

    let raw_names: Vec<RawName> = serde_json::from_str(json_content).map_err(|e| {
        NameForgeError::parse(
            format!("Failed to parse AI response as JSON: {}", e),
            Some(json_content.to_string()),
        )
    })?;

    let mut seen = HashSet::new();
    let names: Vec<GeneratedName> = raw_names
        .into_iter()
        .map(GeneratedName::from)
        .filter(|n| !n.name.is_empty() && seen.insert(n.name.clone()))
        .take(limit)
        .collect();

    if names.is_empty() {
        return Err(NameForgeError::parse("Completion response held no names", None));
    }
    Ok(names)
}
