//! Business name synthesis

use rand::Rng;

use super::{capitalize, clean_word, pick};
use crate::types::{BusinessStyle, Filters};
use crate::words::{business, industry};

/// One business name in the requested style
pub fn business_name<R: Rng + ?Sized>(filters: &Filters, rng: &mut R) -> String {
    match BusinessStyle::from_filter(filters.style()) {
        BusinessStyle::Brandable => {
            format!("{}{}", pick(rng, business::PREFIXES), pick(rng, business::SUFFIXES))
        }
        BusinessStyle::Compound => {
            let lead = lead_word(filters, rng);
            format!("{}{}", capitalize(&lead), pick(rng, business::COMPOUNDS))
        }
        BusinessStyle::Playful => {
            let descriptor = pick(rng, business::DESCRIPTORS);
            let keyword = match filters.industry().and_then(industry::keywords) {
                Some(keywords) => pick(rng, keywords),
                None => pick(rng, business::COMPOUNDS),
            };
            format!("{}{}", descriptor, keyword)
        }
        BusinessStyle::Classic => {
            let lead = lead_word(filters, rng);
            format!("{}{}", capitalize(&lead), pick(rng, business::SUFFIXES))
        }
    }
}

/// First usable word of the description, or a random descriptor
fn lead_word<R: Rng + ?Sized>(filters: &Filters, rng: &mut R) -> String {
    filters
        .description_words()
        .first()
        .map(|w| clean_word(w))
        .filter(|w| !w.is_empty())
        .unwrap_or_else(|| pick(rng, business::DESCRIPTORS).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filters(style: &str, description: Option<&str>, industry: Option<&str>) -> Filters {
        Filters {
            style: Some(style.to_string()),
            description: description.map(str::to_string),
            industry: industry.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_brandable_is_prefix_plus_suffix() {
        let mut rng = StdRng::seed_from_u64(1);
        let f = filters("brandable", None, None);
        for _ in 0..50 {
            let name = business_name(&f, &mut rng);
            let split = business::PREFIXES.iter().any(|p| {
                name.strip_prefix(*p)
                    .map_or(false, |rest| business::SUFFIXES.contains(&rest))
            });
            assert!(split, "{}", name);
        }
    }

    #[test]
    fn test_compound_uses_first_description_word() {
        let mut rng = StdRng::seed_from_u64(2);
        let f = filters("compound", Some("coffee roastery downtown"), None);
        for _ in 0..50 {
            let name = business_name(&f, &mut rng);
            assert!(name.starts_with("Coffee"), "{}", name);
            assert!(business::COMPOUNDS.contains(&&name["Coffee".len()..]));
        }
    }

    #[test]
    fn test_compound_without_description_uses_descriptor() {
        let mut rng = StdRng::seed_from_u64(3);
        let f = filters("compound", None, None);
        let name = business_name(&f, &mut rng);
        assert!(business::DESCRIPTORS.iter().any(|d| name.starts_with(d)), "{}", name);
    }

    #[test]
    fn test_playful_uses_industry_keywords() {
        let mut rng = StdRng::seed_from_u64(4);
        let f = filters("playful", None, Some("food"));
        for _ in 0..50 {
            let name = business_name(&f, &mut rng);
            assert!(industry::FOOD.iter().any(|k| name.ends_with(k)), "{}", name);
        }
    }

    #[test]
    fn test_playful_unknown_industry_uses_compounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let f = filters("playful", None, Some("all"));
        for _ in 0..50 {
            let name = business_name(&f, &mut rng);
            assert!(business::COMPOUNDS.iter().any(|k| name.ends_with(k)), "{}", name);
        }
    }

    #[test]
    fn test_unknown_style_appends_suffix() {
        let mut rng = StdRng::seed_from_u64(6);
        let f = filters("traditional", Some("bakery"), None);
        let name = business_name(&f, &mut rng);
        assert!(name.starts_with("Bakery"));
        assert!(business::SUFFIXES.contains(&&name["Bakery".len()..]));
    }
}
