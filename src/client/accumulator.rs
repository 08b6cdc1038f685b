//! Running list of names shown across "load more" actions

use std::collections::HashSet;

use super::shortlist::Shortlist;
use crate::types::{
    Category, Filters, GeneratedName, GenerationRequest, GenerationResponse, GenerationSource,
};

/// Names requested per batch and revealed per load-more
pub const PAGE_SIZE: usize = 20;

/// Hard ceiling on stored names
pub const MAX_NAMES: usize = 1000;

/// Message shown when the first load fails
pub const LOAD_FAILED: &str = "Failed to generate names";

/// Shown while the last batch came from the template generator
pub const FALLBACK_NOTICE: &str = "using fallback generator";

/// A request issued on behalf of one search.
///
/// Hand `search` back to `complete` or `fail`; replies for a search that has
/// since been replaced are discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingLoad {
    pub search: u64,
    pub request: GenerationRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    LoadingMore,
}

/// Client-side accumulator of generated names.
///
/// The stored list can run ahead of the display cap; `visible` only reveals
/// `display_count` entries.
#[derive(Debug, Clone)]
pub struct NameList {
    state: LoadState,
    /// Bumped on every submit and start-over
    search: u64,
    category: Option<Category>,
    filters: Filters,
    names: Vec<GeneratedName>,
    display_count: usize,
    batch_number: u32,
    has_more: bool,
    source: Option<GenerationSource>,
    error: Option<String>,
    shortlist: Shortlist,
}

impl Default for NameList {
    fn default() -> Self {
        Self::new()
    }
}

impl NameList {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            search: 0,
            category: None,
            filters: Filters::default(),
            names: Vec::new(),
            display_count: PAGE_SIZE,
            batch_number: 0,
            has_more: false,
            source: None,
            error: None,
            shortlist: Shortlist::default(),
        }
    }

    /// Start a fresh search, replacing whatever was shown.
    ///
    /// Returns the request for batch 1.
    pub fn submit(&mut self, category: Category, filters: Filters) -> PendingLoad {
        self.search += 1;
        self.state = LoadState::Loading;
        self.category = Some(category);
        self.filters = filters.clone();
        self.names.clear();
        self.display_count = PAGE_SIZE;
        self.batch_number = 0;
        self.has_more = true;
        self.source = None;
        self.error = None;

        PendingLoad {
            search: self.search,
            request: GenerationRequest::new(category)
                .with_filters(filters)
                .with_batch(1, PAGE_SIZE as u32),
        }
    }

    /// Request the next batch, or `None` when busy, exhausted or idle
    pub fn begin_load_more(&mut self) -> Option<PendingLoad> {
        if self.state != LoadState::Loaded || !self.has_more || self.names.len() >= MAX_NAMES {
            return None;
        }
        let category = self.category?;

        self.state = LoadState::LoadingMore;
        self.error = None;
        Some(PendingLoad {
            search: self.search,
            request: GenerationRequest::new(category)
                .with_filters(self.filters.clone())
                .with_batch(self.batch_number + 1, PAGE_SIZE as u32),
        })
    }

    /// Apply a server response to the pending load.
    ///
    /// Returns `false` when the reply belongs to a replaced search or no load
    /// was pending for that batch; the response is then discarded.
    pub fn complete(&mut self, search: u64, response: GenerationResponse) -> bool {
        if search != self.search {
            return false;
        }
        let expected = self.batch_number + 1;
        let initial = match self.state {
            LoadState::Loading => true,
            LoadState::LoadingMore => false,
            LoadState::Idle | LoadState::Loaded => return false,
        };
        if response.batch_number != expected {
            return false;
        }

        let received = response.names.len();
        if initial {
            self.names.clear();
        } else {
            self.display_count += PAGE_SIZE;
        }
        self.merge(response.names);

        self.batch_number = expected;
        self.source = Some(response.source);
        self.has_more =
            response.has_more && received >= PAGE_SIZE && self.names.len() < MAX_NAMES;
        self.state = LoadState::Loaded;
        true
    }

    /// Record a failed load.
    ///
    /// A failed first load goes back to idle; a failed load-more keeps the list.
    /// Returns `false` when the failure belongs to a replaced search.
    pub fn fail(&mut self, search: u64) -> bool {
        if search != self.search {
            return false;
        }
        match self.state {
            LoadState::Loading => {
                self.state = LoadState::Idle;
                self.has_more = false;
                self.error = Some(LOAD_FAILED.to_string());
                true
            }
            LoadState::LoadingMore => {
                self.state = LoadState::Loaded;
                self.error = Some(LOAD_FAILED.to_string());
                true
            }
            LoadState::Idle | LoadState::Loaded => false,
        }
    }

    /// Clear list, counters and saved names; pending loads are abandoned
    pub fn start_over(&mut self) {
        let search = self.search + 1;
        *self = Self::new();
        self.search = search;
    }

    /// Append names not already present, keeping first occurrences
    fn merge(&mut self, incoming: Vec<GeneratedName>) {
        let mut seen: HashSet<String> = self.names.iter().map(|n| n.name.clone()).collect();
        for name in incoming {
            if self.names.len() >= MAX_NAMES {
                break;
            }
            if seen.insert(name.name.clone()) {
                self.names.push(name);
            }
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Current search; replies carrying another value are discarded
    pub fn search(&self) -> u64 {
        self.search
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, LoadState::Loading | LoadState::LoadingMore)
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Every stored name, including those past the display cap
    pub fn names(&self) -> &[GeneratedName] {
        &self.names
    }

    pub fn visible(&self) -> &[GeneratedName] {
        &self.names[..self.display_count.min(self.names.len())]
    }

    pub fn total(&self) -> usize {
        self.names.len()
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    /// Last batch successfully applied
    pub fn batch_number(&self) -> u32 {
        self.batch_number
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn source(&self) -> Option<GenerationSource> {
        self.source
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self.source {
            Some(GenerationSource::Fallback) => Some(FALLBACK_NOTICE),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn shortlist(&self) -> &Shortlist {
        &self.shortlist
    }

    pub fn shortlist_mut(&mut self) -> &mut Shortlist {
        &mut self.shortlist
    }
}
