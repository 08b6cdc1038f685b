//! Baby name synthesis

use rand::seq::SliceRandom;
use rand::Rng;

use super::{capitalize, pick};
use crate::types::{Filters, Gender};
use crate::words::{baby, gender_bank, GenderBank};

/// One baby name honouring gender and first/last letter filters.
///
/// Names come from the traditional and modern lists. When the letter filters
/// rule out every listed name, a name is built from syllables and its ends
/// are overwritten to match, even if that reads oddly.
pub fn baby_name<R: Rng + ?Sized>(filters: &Filters, rng: &mut R) -> String {
    let bank = match gender_bank(Gender::from_filter(filters.gender())) {
        Some(bank) => bank,
        None if rng.gen_bool(0.5) => &baby::MALE,
        None => &baby::FEMALE,
    };

    let starts_with = filters.starts_with();
    let ends_with = filters.ends_with();
    let starts_lower = starts_with.map(str::to_lowercase);
    let ends_lower = ends_with.map(str::to_lowercase);

    let candidates: Vec<&'static str> = bank
        .pool()
        .filter(|name| {
            starts_lower
                .as_deref()
                .map_or(true, |s| name.to_lowercase().starts_with(s))
        })
        .filter(|name| {
            ends_lower
                .as_deref()
                .map_or(true, |e| name.to_lowercase().ends_with(e))
        })
        .collect();

    match candidates.choose(rng) {
        Some(name) => name.to_string(),
        None => forced_name(bank, starts_with, ends_with, rng),
    }
}

/// Syllable name with its first and last characters replaced by the filters
fn forced_name<R: Rng + ?Sized>(
    bank: &GenderBank,
    starts_with: Option<&str>,
    ends_with: Option<&str>,
    rng: &mut R,
) -> String {
    let mut name = format!("{}{}", pick(rng, bank.prefixes), pick(rng, bank.suffixes));

    if let Some(start) = starts_with {
        let rest: String = name.chars().skip(start.chars().count()).collect();
        name = capitalize(start) + &rest;
    }
    if let Some(end) = ends_with {
        let keep = name.chars().count().saturating_sub(end.chars().count());
        name = name.chars().take(keep).collect::<String>() + &end.to_lowercase();
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filters(gender: &str, starts: Option<&str>, ends: Option<&str>) -> Filters {
        Filters {
            gender: Some(gender.to_string()),
            starts_with: starts.map(str::to_string),
            ends_with: ends.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_gender_lists_are_respected() {
        let mut rng = StdRng::seed_from_u64(21);
        let f = filters("female", None, None);
        for _ in 0..100 {
            let name = baby_name(&f, &mut rng);
            assert!(baby::FEMALE.pool().any(|n| n == name), "{}", name);
        }
    }

    #[test]
    fn test_starts_with_z_from_pool() {
        let mut rng = StdRng::seed_from_u64(22);
        let f = filters("male", Some("z"), None);
        for _ in 0..100 {
            let name = baby_name(&f, &mut rng);
            assert!(name == "Zion" || name == "Zane", "{}", name);
        }
    }

    #[test]
    fn test_starts_with_z_any_gender() {
        let mut rng = StdRng::seed_from_u64(23);
        let f = filters("any", Some("Z"), None);
        for _ in 0..200 {
            let name = baby_name(&f, &mut rng);
            assert!(name.to_lowercase().starts_with('z'), "{}", name);
        }
    }

    #[test]
    fn test_empty_pool_forces_both_ends() {
        let mut rng = StdRng::seed_from_u64(24);
        let f = filters("female", Some("x"), Some("q"));
        for _ in 0..100 {
            let name = baby_name(&f, &mut rng);
            assert!(name.starts_with('X'), "{}", name);
            assert!(name.ends_with('q'), "{}", name);
        }
    }

    #[test]
    fn test_ends_with_filter() {
        let mut rng = StdRng::seed_from_u64(25);
        let f = filters("female", None, Some("A"));
        for _ in 0..100 {
            let name = baby_name(&f, &mut rng);
            assert!(name.ends_with('a'), "{}", name);
        }
    }
}
