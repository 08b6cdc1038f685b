//! Batch generation of unique template names

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use super::synthesize;
use crate::types::{Category, Filters};

/// Consecutive repeats tolerated before the word space counts as exhausted,
/// unless the batch itself is larger
const MIN_STALE_CYCLE: usize = 50;

/// Hard cap on synthesizer calls per requested name
const MAX_ATTEMPTS_PER_NAME: usize = 50;

/// Collects a batch of distinct names for one category and filter set
pub struct BatchGenerator<'a> {
    category: Category,
    filters: &'a Filters,
}

impl<'a> BatchGenerator<'a> {
    pub fn new(category: Category, filters: &'a Filters) -> Self {
        Self { category, filters }
    }

    /// Generate up to `target` distinct names in random order.
    ///
    /// Stops early once a full cycle of draws (the larger of `target` and
    /// 50) yields nothing new, so a small word space returns a short batch
    /// instead of spinning.
    pub fn generate<R: Rng + ?Sized>(&self, target: usize, rng: &mut R) -> Vec<String> {
        let mut names = Vec::with_capacity(target);
        let mut seen = HashSet::with_capacity(target);
        let stale_cycle = target.max(MIN_STALE_CYCLE);
        let max_attempts = target.saturating_mul(MAX_ATTEMPTS_PER_NAME);
        let mut stale = 0;
        let mut attempts = 0;

        while names.len() < target {
            let name = synthesize(self.category, self.filters, rng);
            attempts += 1;

            if seen.insert(name.clone()) {
                names.push(name);
                stale = 0;
            } else {
                stale += 1;
            }

            if stale >= stale_cycle || attempts >= max_attempts {
                tracing::debug!(
                    category = %self.category,
                    requested = target,
                    generated = names.len(),
                    attempts,
                    "Word space exhausted before batch was full"
                );
                break;
            }
        }

        names.shuffle(rng);
        names
    }
}
