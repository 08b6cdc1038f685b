//! Client side of the generator: accumulated results, colours, saved names
//! and the HTTP client that feeds them.

pub mod accumulator;
pub mod http;
pub mod palette;
pub mod shortlist;

pub use accumulator::{LoadState, NameList, PendingLoad, FALLBACK_NOTICE, MAX_NAMES, PAGE_SIZE};
pub use http::{GeneratorClient, LoadOutcome};
pub use palette::color_for;
pub use shortlist::Shortlist;
