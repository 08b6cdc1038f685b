//! Word banks - static, categorized building blocks for name synthesis
//!
//! Every list is a `&'static` slice compiled into the binary, so lookups never
//! allocate and any number of request handlers can read them at once.

pub mod baby;
pub mod business;
pub mod hashtag;
pub mod industry;
pub mod pet;

use crate::error::{NameForgeError, Result};
use crate::types::{Gender, PetType};

pub use baby::GenderBank;

/// Gender bank for an explicit gender; `Any` has no bank of its own
pub fn gender_bank(gender: Gender) -> Option<&'static GenderBank> {
    match gender {
        Gender::Male => Some(&baby::MALE),
        Gender::Female => Some(&baby::FEMALE),
        Gender::Any => None,
    }
}

/// Name list for a pet species
pub fn pet_names(pet_type: PetType) -> &'static [&'static str] {
    match pet_type {
        PetType::Dog => pet::DOG,
        PetType::Cat => pet::CAT,
        PetType::Bird => pet::BIRD,
        PetType::Other => pet::OTHER,
    }
}

/// Look up a word bank by category key and optional sub-list.
///
/// Keys: `business`, `baby-male`, `baby-female`, `baby-meaning`,
/// `baby-origin`, `baby-traits`, `pet-dog`, `pet-cat`, `pet-bird`,
/// `pet-other`, `pet-style`, `pet-traits`, `industry-<id>` and `hashtag`.
/// Callers are expected to resolve their own defaults before calling; an
/// unknown key is an error.
pub fn lookup(category: &str, subcategory: Option<&str>) -> Result<&'static [&'static str]> {
    let key = category.trim().to_lowercase();
    let sub = subcategory.map(|s| s.trim().to_lowercase());
    let sub = sub.as_deref();

    let list = match (key.as_str(), sub) {
        ("business", None | Some("descriptors")) => business::DESCRIPTORS,
        ("business", Some("prefixes")) => business::PREFIXES,
        ("business", Some("suffixes")) => business::SUFFIXES,
        ("business", Some("compounds")) => business::COMPOUNDS,

        ("baby-male" | "baby-female", sub) => {
            let bank = if key == "baby-male" { &baby::MALE } else { &baby::FEMALE };
            match sub {
                None | Some("traditional") => bank.traditional,
                Some("modern") => bank.modern,
                Some("prefixes") => bank.prefixes,
                Some("suffixes") => bank.suffixes,
                Some(other) => return Err(not_found(&key, Some(other))),
            }
        }
        ("baby-meaning", None) => baby::MEANINGS,
        ("baby-origin", None) => baby::ORIGINS,
        ("baby-traits", None) => baby::PERSONALITY_TRAITS,

        ("pet-dog", None) => pet::DOG,
        ("pet-cat", None) => pet::CAT,
        ("pet-bird", None) => pet::BIRD,
        ("pet-other", None) => pet::OTHER,
        ("pet-style", None | Some("prefixes")) => pet::PREFIXES,
        ("pet-style", Some("suffixes")) => pet::SUFFIXES,
        ("pet-style", Some("colors")) => pet::COLORS,
        ("pet-traits", None) => pet::PERSONALITY_TRAITS,

        ("hashtag", None | Some("prefixes")) => hashtag::PREFIXES,
        ("hashtag", Some("suffixes")) => hashtag::SUFFIXES,
        ("hashtag", Some("connectors")) => hashtag::CONNECTORS,

        (k, None) if k.starts_with("industry-") => industry::keywords(&k["industry-".len()..])
            .ok_or_else(|| not_found(k, None))?,

        (k, sub) => return Err(not_found(k, sub)),
    };

    Ok(list)
}

fn not_found(category: &str, subcategory: Option<&str>) -> NameForgeError {
    match subcategory {
        Some(sub) => NameForgeError::word_bank_not_found(format!("{}/{}", category, sub)),
        None => NameForgeError::word_bank_not_found(category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_banks() {
        assert_eq!(lookup("business", Some("prefixes")).unwrap()[0], "Nova");
        assert_eq!(lookup("baby-female", Some("modern")).unwrap().len(), 20);
        assert_eq!(lookup("pet-dog", None).unwrap(), pet::DOG);
        assert_eq!(lookup("industry-tech", None).unwrap(), industry::TECH);
        assert_eq!(lookup("Hashtag", Some("Connectors")).unwrap(), hashtag::CONNECTORS);
    }

    #[test]
    fn test_lookup_unknown_is_not_found() {
        assert!(matches!(
            lookup("pet-dragon", None),
            Err(NameForgeError::WordBankNotFound { .. })
        ));
        assert!(lookup("industry-all", None).is_err());
        assert!(lookup("baby-male", Some("nicknames")).is_err());
    }

    #[test]
    fn test_every_bank_is_non_empty() {
        for list in [
            business::PREFIXES,
            business::SUFFIXES,
            business::COMPOUNDS,
            business::DESCRIPTORS,
            baby::MEANINGS,
            baby::ORIGINS,
            pet::COLORS,
            hashtag::PREFIXES,
        ] {
            assert!(!list.is_empty());
            assert!(list.iter().all(|w| !w.is_empty()));
        }
        for industry in industry::INDUSTRIES {
            assert!(industry::keywords(industry).is_some());
        }
    }

    #[test]
    fn test_species_defaults() {
        assert_eq!(pet_names(PetType::Other), pet::OTHER);
        assert!(gender_bank(Gender::Any).is_none());
        assert_eq!(gender_bank(Gender::Male).unwrap().traditional[0], "James");
    }
}
