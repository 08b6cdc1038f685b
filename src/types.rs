//! Core types and structures for name-forge

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{NameForgeError, Result};

/// Names requested per batch when the caller does not say
pub const DEFAULT_BATCH_SIZE: u32 = 20;

/// Largest batch a single request may ask for
pub const MAX_BATCH_SIZE: u32 = 100;

/// Hard ceiling on names handed out over one session
pub const MAX_TOTAL_NAMES: u32 = 1000;

/// Whether another batch may follow `batch_number` batches of `batch_size` names
pub fn has_more(batch_number: u32, batch_size: u32) -> bool {
    u64::from(batch_number) * u64::from(batch_size) < u64::from(MAX_TOTAL_NAMES)
}

/// Name category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "website", alias = "product", alias = "app")]
    Business,
    Baby,
    Pet,
    Hashtag,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Baby => "baby",
            Category::Pet => "pet",
            Category::Hashtag => "hashtag",
        }
    }

    pub fn all() -> [Category; 4] {
        [Category::Business, Category::Baby, Category::Pet, Category::Hashtag]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = NameForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "business" | "website" | "product" | "app" => Ok(Category::Business),
            "baby" => Ok(Category::Baby),
            "pet" => Ok(Category::Pet),
            "hashtag" => Ok(Category::Hashtag),
            other => Err(NameForgeError::validation(format!("Unknown name type: {}", other))),
        }
    }
}

/// Where a batch of names came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationSource {
    Remote,
    Fallback,
}

impl std::fmt::Display for GenerationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationSource::Remote => write!(f, "remote"),
            GenerationSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Business naming style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStyle {
    /// Invented word: prefix + suffix
    Brandable,
    /// Keyword + compound word
    Compound,
    /// Descriptor + industry keyword
    Playful,
    /// Keyword + suffix, used for any style not listed above
    Classic,
}

impl BusinessStyle {
    /// Missing style means brandable, unrecognised styles get the classic rule
    pub fn from_filter(style: Option<&str>) -> Self {
        match style.map(|s| s.trim().to_lowercase()) {
            None => BusinessStyle::Brandable,
            Some(s) if s.is_empty() || s == "brandable" => BusinessStyle::Brandable,
            Some(s) if s == "compound" => BusinessStyle::Compound,
            Some(s) if s == "playful" => BusinessStyle::Playful,
            Some(_) => BusinessStyle::Classic,
        }
    }
}

/// Baby name gender preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Any,
}

impl Gender {
    pub fn from_filter(gender: Option<&str>) -> Self {
        match gender.map(|g| g.trim().to_lowercase()).as_deref() {
            Some("male") | Some("boy") => Gender::Male,
            Some("female") | Some("girl") => Gender::Female,
            _ => Gender::Any,
        }
    }
}

/// Pet species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Other,
}

impl PetType {
    /// No pet type means dog; an unrecognised one falls back to `Other`
    pub fn from_filter(pet_type: Option<&str>) -> Self {
        match pet_type.map(|p| p.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("dog") => PetType::Dog,
            Some("cat") => PetType::Cat,
            Some("bird") => PetType::Bird,
            Some(_) => PetType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Bird => "bird",
            PetType::Other => "other",
        }
    }
}

/// Free-form generation filters sent alongside the category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_with: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word2: Option<String>,
    /// Anything else the form sent; carried but not interpreted
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Trim an optional filter and drop it when blank
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Filters {
    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    /// Description, or the keywords field some forms send instead
    pub fn keywords_text(&self) -> Option<&str> {
        self.description().or_else(|| present(&self.keywords))
    }

    pub fn style(&self) -> Option<&str> {
        present(&self.style)
    }

    pub fn industry(&self) -> Option<&str> {
        present(&self.industry)
    }

    pub fn gender(&self) -> Option<&str> {
        present(&self.gender)
    }

    pub fn starts_with(&self) -> Option<&str> {
        present(&self.starts_with)
    }

    pub fn ends_with(&self) -> Option<&str> {
        present(&self.ends_with)
    }

    pub fn pet_type(&self) -> Option<&str> {
        present(&self.pet_type)
    }

    pub fn word1(&self) -> Option<&str> {
        present(&self.word1)
    }

    pub fn word2(&self) -> Option<&str> {
        present(&self.word2)
    }

    /// Lowercased words of the description
    pub fn description_words(&self) -> Vec<String> {
        self.keywords_text()
            .map(|d| d.split_whitespace().map(str::to_lowercase).collect())
            .unwrap_or_default()
    }

    /// Lowercased trait words for pets, from description and characteristics
    pub fn trait_words(&self) -> Vec<String> {
        [self.description(), present(&self.characteristics)]
            .into_iter()
            .flatten()
            .flat_map(str::split_whitespace)
            .map(str::to_lowercase)
            .collect()
    }
}

fn default_batch_size() -> u32 {
    DEFAULT_BATCH_SIZE
}

fn default_batch_number() -> u32 {
    1
}

/// Body of `POST /generate-names`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    #[serde(default = "default_batch_number")]
    pub batch_number: u32,
    #[serde(flatten)]
    pub filters: Filters,
}

impl GenerationRequest {
    /// First batch of `category` with default size and no filters
    pub fn new(category: Category) -> Self {
        Self {
            category,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_number: 1,
            filters: Filters::default(),
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_batch(mut self, batch_number: u32, batch_size: u32) -> Self {
        self.batch_number = batch_number;
        self.batch_size = batch_size;
        self
    }

    /// Reject batch parameters the endpoint cannot serve
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(crate::validation_error!(
                "batchSize must be between 1 and {}, got {}",
                MAX_BATCH_SIZE,
                self.batch_size
            ));
        }
        if self.batch_number == 0 {
            return Err(crate::validation_error!("batchNumber must be at least 1"));
        }
        Ok(())
    }

    pub fn has_more(&self) -> bool {
        has_more(self.batch_number, self.batch_size)
    }
}

/// A single generated name with category-specific attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<Vec<String>>,
}

impl GeneratedName {
    /// Bare name with no attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            meaning: None,
            origin: None,
            tags: None,
            seo_score: None,
            available: None,
            personality: None,
        }
    }
}

/// Response envelope of `POST /generate-names`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub names: Vec<GeneratedName>,
    pub source: GenerationSource,
    pub batch_number: u32,
    pub has_more: bool,
}

/// Error envelope returned on unrecoverable failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: String,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key: String::new(),
            base_url: None,
            timeout_secs: 30,
            max_tokens: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more_boundary() {
        assert!(has_more(1, 20));
        assert!(has_more(49, 20));
        assert!(!has_more(50, 20));
        assert!(!has_more(u32::MAX, u32::MAX));
    }

    #[test]
    fn test_request_defaults_and_flattened_filters() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"type":"baby","gender":"female","startsWith":"Z","timestamp":123}"#,
        )
        .unwrap();

        assert_eq!(request.category, Category::Baby);
        assert_eq!(request.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(request.batch_number, 1);
        assert_eq!(request.filters.gender(), Some("female"));
        assert_eq!(request.filters.starts_with(), Some("Z"));
        assert!(request.filters.extra.contains_key("timestamp"));
    }

    #[test]
    fn test_category_aliases() {
        let request: GenerationRequest = serde_json::from_str(r#"{"type":"website"}"#).unwrap();
        assert_eq!(request.category, Category::Business);
        assert!(serde_json::from_str::<GenerationRequest>(r#"{"type":"spaceship"}"#).is_err());
        assert_eq!("Hashtag".parse::<Category>().unwrap(), Category::Hashtag);
    }

    #[test]
    fn test_validate_batch_bounds() {
        assert!(GenerationRequest::new(Category::Pet).validate().is_ok());
        assert!(GenerationRequest::new(Category::Pet).with_batch(0, 20).validate().is_err());
        assert!(GenerationRequest::new(Category::Pet).with_batch(1, 0).validate().is_err());
        assert!(GenerationRequest::new(Category::Pet)
            .with_batch(1, MAX_BATCH_SIZE + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_generated_name_skips_missing_fields() {
        let json = serde_json::to_value(GeneratedName::new("Novaly")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Novaly" }));
    }

    #[test]
    fn test_filter_enums() {
        assert_eq!(BusinessStyle::from_filter(None), BusinessStyle::Brandable);
        assert_eq!(BusinessStyle::from_filter(Some("Compound")), BusinessStyle::Compound);
        assert_eq!(BusinessStyle::from_filter(Some("traditional")), BusinessStyle::Classic);
        assert_eq!(Gender::from_filter(Some("all")), Gender::Any);
        assert_eq!(PetType::from_filter(None), PetType::Dog);
        assert_eq!(PetType::from_filter(Some("hamster")), PetType::Other);
    }

    #[test]
    fn test_trait_words_merge_description_and_characteristics() {
        let filters = Filters {
            description: Some("Fluffy lazy".to_string()),
            characteristics: Some("Loud".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.trait_words(), vec!["fluffy", "lazy", "loud"]);
    }
}
