//! Template-based name generation
//!
//! Used whenever the remote generator is unavailable. Each category has a
//! synthesizer that draws from the word banks; the batch generator collects
//! unique names and the formatter attaches category-specific attributes.

pub mod baby;
pub mod batch;
pub mod business;
pub mod format;
pub mod hashtag;
pub mod pet;

pub use batch::BatchGenerator;
pub use format::decorate;
pub use pet::PetStrategy;

use crate::types::{Category, Filters};
use rand::seq::SliceRandom;
use rand::Rng;

/// Produce one candidate name for `category`.
///
/// Never fails and never returns an empty string: every missing filter has a
/// word-bank default.
pub fn synthesize<R: Rng + ?Sized>(category: Category, filters: &Filters, rng: &mut R) -> String {
    match category {
        Category::Business => business::business_name(filters, rng),
        Category::Baby => baby::baby_name(filters, rng),
        Category::Pet => pet::pet_name(filters, rng),
        Category::Hashtag => hashtag::hashtag(filters, rng),
    }
}

/// Uniform draw from a word list
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, list: &'static [&'static str]) -> &'static str {
    list.choose(rng).copied().unwrap_or_default()
}

/// Upper-case the first character, lower-case the rest
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Keep only letters and digits of a user-supplied word
pub(crate) fn clean_word(word: &str) -> String {
    word.chars().filter(|c| c.is_alphanumeric()).collect()
}
