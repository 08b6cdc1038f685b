//! Pet name synthesis

use rand::seq::SliceRandom;
use rand::Rng;

use super::{capitalize, clean_word, pick};
use crate::types::{Filters, PetType};
use crate::words::{pet, pet_names};

/// Ways of building a pet name, tried in random order per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetStrategy {
    /// A species name as-is
    BankName,
    /// Playful adjective + species name
    AdjectiveName,
    /// Colour + body-part or texture ending
    ColorSuffix,
    /// Capitalized trait word + ending; needs traits
    TraitSuffix,
}

impl PetStrategy {
    pub const ALL: [PetStrategy; 4] = [
        PetStrategy::BankName,
        PetStrategy::AdjectiveName,
        PetStrategy::ColorSuffix,
        PetStrategy::TraitSuffix,
    ];

    /// Build a name, or `None` when this strategy has nothing to work with
    pub fn attempt<R: Rng + ?Sized>(
        self,
        names: &'static [&'static str],
        traits: &[String],
        rng: &mut R,
    ) -> Option<String> {
        match self {
            PetStrategy::BankName => Some(pick(rng, names).to_string()),
            PetStrategy::AdjectiveName => {
                Some(format!("{}{}", pick(rng, pet::PREFIXES), pick(rng, names)))
            }
            PetStrategy::ColorSuffix => {
                Some(format!("{}{}", pick(rng, pet::COLORS), pick(rng, pet::SUFFIXES)))
            }
            PetStrategy::TraitSuffix => {
                let word = traits.choose(rng)?;
                Some(format!("{}{}", capitalize(word), pick(rng, pet::SUFFIXES)))
            }
        }
    }
}

/// One pet name for the requested species
pub fn pet_name<R: Rng + ?Sized>(filters: &Filters, rng: &mut R) -> String {
    let names = pet_names(PetType::from_filter(filters.pet_type()));
    let traits: Vec<String> = filters
        .trait_words()
        .iter()
        .map(|w| clean_word(w))
        .filter(|w| !w.is_empty())
        .collect();

    let mut order = PetStrategy::ALL;
    order.shuffle(rng);

    order
        .into_iter()
        .find_map(|strategy| strategy.attempt(names, &traits, rng))
        .unwrap_or_else(|| pick(rng, names).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_pet_derived(name: &str, names: &[&str], traits: &[&str]) -> bool {
        let from_bank = names.iter().any(|n| name.ends_with(n));
        let from_color = pet::COLORS.iter().any(|c| name.starts_with(c))
            && pet::SUFFIXES.iter().any(|s| name.ends_with(s));
        let from_trait = traits.iter().any(|t| name.starts_with(&capitalize(t)))
            && pet::SUFFIXES.iter().any(|s| name.ends_with(s));
        from_bank || from_color || from_trait
    }

    #[test]
    fn test_trait_strategy_needs_traits() {
        let mut rng = StdRng::seed_from_u64(31);
        assert_eq!(PetStrategy::TraitSuffix.attempt(pet::DOG, &[], &mut rng), None);
        let traits = vec!["sleepy".to_string()];
        let name = PetStrategy::TraitSuffix.attempt(pet::DOG, &traits, &mut rng).unwrap();
        assert!(name.starts_with("Sleepy"));
    }

    #[test]
    fn test_dog_names_derive_from_pet_banks() {
        let mut rng = StdRng::seed_from_u64(32);
        let filters = Filters {
            pet_type: Some("dog".to_string()),
            ..Default::default()
        };
        for _ in 0..200 {
            let name = pet_name(&filters, &mut rng);
            assert!(is_pet_derived(&name, pet::DOG, &[]), "{}", name);
        }
    }

    #[test]
    fn test_traits_show_up_eventually() {
        let mut rng = StdRng::seed_from_u64(33);
        let filters = Filters {
            pet_type: Some("cat".to_string()),
            description: Some("grumpy".to_string()),
            ..Default::default()
        };
        let names: Vec<String> = (0..200).map(|_| pet_name(&filters, &mut rng)).collect();
        assert!(names.iter().any(|n| n.starts_with("Grumpy")));
        assert!(names.iter().all(|n| is_pet_derived(n, pet::CAT, &["grumpy"])));
    }

    #[test]
    fn test_unknown_species_uses_other_list() {
        let mut rng = StdRng::seed_from_u64(34);
        let filters = Filters {
            pet_type: Some("iguana".to_string()),
            ..Default::default()
        };
        for _ in 0..100 {
            let name = pet_name(&filters, &mut rng);
            assert!(is_pet_derived(&name, pet::OTHER, &[]), "{}", name);
        }
    }
}
