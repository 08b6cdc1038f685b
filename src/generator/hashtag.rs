//! Hashtag synthesis

use chrono::{Datelike, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{clean_word, pick};
use crate::types::Filters;
use crate::words::hashtag;

/// One hashtag built from two keywords
pub fn hashtag<R: Rng + ?Sized>(filters: &Filters, rng: &mut R) -> String {
    let (first, second) = keywords(filters, rng);
    let options = variants(&first, &second, Utc::now().year());

    options
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| format!("#{}{}", first, second))
}

/// Every formatted variant of the two keywords
pub fn variants(first: &str, second: &str, year: i32) -> Vec<String> {
    let mut options = vec![
        format!("#{}{}", first, second),
        format!("#{}_{}", first, second),
        format!("#{}{}", second, first),
    ];
    options.extend(
        hashtag::CONNECTORS
            .iter()
            .map(|connector| format!("#{}{}{}", first, connector, second)),
    );
    options.extend(
        hashtag::TAILS
            .iter()
            .map(|tail| format!("#{}{}{}", first, second, tail)),
    );
    options.extend(
        hashtag::LEADS
            .iter()
            .map(|lead| format!("#{}{}{}", lead, first, second)),
    );
    options.push(format!("#{}{}{}", first, second, year));
    options
}

/// Keywords from word1/word2, else the description, else trending defaults
fn keywords<R: Rng + ?Sized>(filters: &Filters, rng: &mut R) -> (String, String) {
    let described: Vec<String> = filters
        .description_words()
        .iter()
        .map(|w| clean_word(w))
        .filter(|w| !w.is_empty())
        .collect();

    let first = filters
        .word1()
        .map(clean_word)
        .filter(|w| !w.is_empty())
        .or_else(|| described.first().cloned())
        .unwrap_or_else(|| pick(rng, hashtag::PREFIXES).to_string());
    let second = filters
        .word2()
        .map(clean_word)
        .filter(|w| !w.is_empty())
        .or_else(|| described.get(1).cloned())
        .unwrap_or_else(|| pick(rng, hashtag::SUFFIXES).to_string());

    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_variants_cover_every_shape() {
        let options = variants("fitness", "motivation", 2026);
        assert!(options.contains(&"#fitnessmotivation".to_string()));
        assert!(options.contains(&"#fitness_motivation".to_string()));
        assert!(options.contains(&"#motivationfitness".to_string()));
        assert!(options.contains(&"#fitnessAndmotivation".to_string()));
        assert!(options.contains(&"#Dailyfitnessmotivation".to_string()));
        assert!(options.contains(&"#Thefitnessmotivation".to_string()));
        assert!(options.contains(&"#fitnessmotivationCommunity".to_string()));
        assert!(options.contains(&"#fitnessmotivation2026".to_string()));
        assert!(options.iter().all(|o| o.starts_with('#')));
    }

    #[test]
    fn test_user_words_are_used_and_cleaned() {
        let mut rng = StdRng::seed_from_u64(41);
        let filters = Filters {
            word1: Some("fit ness".to_string()),
            word2: Some("goals!".to_string()),
            ..Default::default()
        };
        for _ in 0..50 {
            let tag = hashtag(&filters, &mut rng);
            assert!(tag.contains("fitness") && tag.contains("goals"), "{}", tag);
        }
    }

    #[test]
    fn test_description_supplies_missing_words() {
        let mut rng = StdRng::seed_from_u64(42);
        let filters = Filters {
            description: Some("Coffee mornings".to_string()),
            ..Default::default()
        };
        let tag = hashtag(&filters, &mut rng);
        assert!(tag.contains("coffee") && tag.contains("mornings"), "{}", tag);
    }

    #[test]
    fn test_defaults_come_from_trending_lists() {
        let mut rng = StdRng::seed_from_u64(43);
        let tag = hashtag(&Filters::default(), &mut rng);
        assert!(tag.starts_with('#'));
        assert!(hashtag::PREFIXES.iter().any(|p| tag.contains(p)), "{}", tag);
    }
}
