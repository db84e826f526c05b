//! Domain search module - sample dictionary words and find free domains
//!
//! Phase 1: user-supplied custom words, one random TLD each
//! Phase 2: random draws from the filtered dictionary until enough are found

mod cancel;
mod engine;
mod pool;
mod rank;
mod state;
mod words;

pub use cancel::CancelToken;
pub use engine::{DomainSearch, SearchEvent};
pub use pool::WordPool;
pub use rank::{shortest_n, DEFAULT_SHORTEST};
pub use state::{SearchOutcome, SearchState};
pub use words::{filter_words, words, WordSource};

use crate::types::SearchConfig;

/// Build the dictionary pool for a run: corpus plus custom words, filtered
pub fn dictionary_pool(corpus: WordSource, config: &SearchConfig) -> Vec<String> {
    filter_words(
        words(corpus.into_words(), &config.custom_words),
        config.startswith.as_deref(),
        config.endswith.as_deref(),
    )
}
