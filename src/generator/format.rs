//! Attach category-specific attributes to template names

use rand::seq::SliceRandom;
use rand::Rng;

use super::pick;
use crate::types::{Category, Filters, GeneratedName};
use crate::words::{baby, pet};

/// Turn a raw template name into a `GeneratedName`.
///
/// Scores, availability and traits are simulated; nothing here consults a
/// real registry.
pub fn decorate<R: Rng + ?Sized>(
    name: String,
    category: Category,
    filters: &Filters,
    rng: &mut R,
) -> GeneratedName {
    let mut generated = GeneratedName::new(name);

    match category {
        Category::Business => {
            generated.description = Some(format!(
                "A {} name for your business in the {} industry",
                filters.style().unwrap_or("brandable"),
                filters.industry().unwrap_or("business"),
            ));
            generated.seo_score = Some(rng.gen_range(70..100));
            generated.available = Some(rng.gen_bool(0.7));
            generated.tags = Some(tags(filters));
        }
        Category::Baby => {
            generated.meaning = Some(pick(rng, baby::MEANINGS).to_string());
            generated.origin = Some(pick(rng, baby::ORIGINS).to_string());
            generated.personality = Some(sample(rng, baby::PERSONALITY_TRAITS, 2..=4));
        }
        Category::Pet => {
            generated.description = Some(format!(
                "A perfect name for your {}",
                filters.pet_type().unwrap_or("pet"),
            ));
            generated.personality = Some(sample(rng, pet::PERSONALITY_TRAITS, 2..=3));
        }
        Category::Hashtag => {
            generated.description = Some("A trending hashtag combination".to_string());
            generated.tags = Some(tags(filters));
        }
    }

    generated
}

/// Industry, style and the first three description words
pub fn tags(filters: &Filters) -> Vec<String> {
    filters
        .industry()
        .into_iter()
        .chain(filters.style())
        .chain(filters.description().into_iter().flat_map(|d| d.split_whitespace().take(3)))
        .map(str::to_string)
        .collect()
}

/// Distinct random entries, count drawn from `range`
fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    list: &'static [&'static str],
    range: std::ops::RangeInclusive<usize>,
) -> Vec<String> {
    let count = rng.gen_range(range);
    list.choose_multiple(rng, count).map(|t| t.to_string()).collect()
}
