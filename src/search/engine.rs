//! Domain search loop: custom words first, then random dictionary draws

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::cancel::CancelToken;
use super::pool::WordPool;
use super::state::{SearchOutcome, SearchState};
use crate::domain::AvailabilityCheck;
use crate::config_error;
use crate::error::Result;
use crate::types::{AvailabilityVerdict, SearchConfig, SearchPhase, StopReason};

/// Progress notifications emitted while a search runs
#[derive(Debug, Clone, Copy)]
pub enum SearchEvent<'a> {
    /// A phase is about to start
    PhaseStarted(SearchPhase),
    /// A domain was queried
    Checked {
        phase: SearchPhase,
        domain: &'a str,
        verdict: &'a AvailabilityVerdict,
        available: usize,
        target: usize,
        attempts: u64,
    },
    /// A domain was formed again and not re-queried
    Skipped { phase: SearchPhase, domain: &'a str },
    /// The search stopped
    Finished(StopReason),
}

enum Step {
    Continue,
    Cancelled,
}

/// Sequential availability search over custom and dictionary words
pub struct DomainSearch<O, R = StdRng> {
    oracle: O,
    config: SearchConfig,
    rng: R,
    cancel: CancelToken,
}

impl<O: AvailabilityCheck> DomainSearch<O, StdRng> {
    /// Create a search seeded from `config.seed`, or from entropy
    pub fn new(oracle: O, config: SearchConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(oracle, config, rng)
    }
}

impl<O: AvailabilityCheck, R: Rng> DomainSearch<O, R> {
    /// Create a search with an explicit random source
    pub fn with_rng(oracle: O, config: SearchConfig, rng: R) -> Result<Self> {
        if config.tlds.is_empty() {
            return Err(config_error!("At least one TLD is required"));
        }

        Ok(Self {
            oracle,
            config,
            rng,
            cancel: CancelToken::new(),
        })
    }

    /// Stop the search when this token is cancelled
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one search over the (already filtered) dictionary words
    pub async fn run<F>(&mut self, dictionary: Vec<String>, mut on_event: F) -> SearchOutcome
    where
        F: FnMut(&SearchEvent<'_>),
    {
        let mut state = SearchState::new();
        let target = self.config.count;

        if target == 0 {
            return Self::finish(state, StopReason::TargetReached, &mut on_event);
        }

        if !self.config.custom_words.is_empty() {
            on_event(&SearchEvent::PhaseStarted(SearchPhase::Custom));

            let custom_words = self.config.custom_words.clone();
            for word in &custom_words {
                if self.cancel.is_cancelled() {
                    return Self::finish(state, StopReason::Cancelled, &mut on_event);
                }
                let Some(domain) = self.candidate(word) else {
                    continue;
                };
                if let Step::Cancelled = self
                    .check(&mut state, domain, SearchPhase::Custom, &mut on_event)
                    .await
                {
                    return Self::finish(state, StopReason::Cancelled, &mut on_event);
                }
                if state.available_count() >= target {
                    return Self::finish(state, StopReason::TargetReached, &mut on_event);
                }
            }
        }

        on_event(&SearchEvent::PhaseStarted(SearchPhase::Dictionary));

        let mut pool = WordPool::new(dictionary);
        tracing::debug!(pool = pool.len(), target = target, "Starting dictionary phase");

        while state.available_count() < target {
            if self.cancel.is_cancelled() {
                return Self::finish(state, StopReason::Cancelled, &mut on_event);
            }
            let Some(word) = pool.draw(&mut self.rng) else {
                break;
            };
            let Some(domain) = self.candidate(&word) else {
                continue;
            };
            if let Step::Cancelled = self
                .check(&mut state, domain, SearchPhase::Dictionary, &mut on_event)
                .await
            {
                return Self::finish(state, StopReason::Cancelled, &mut on_event);
            }
        }

        let reason = if state.available_count() >= target {
            StopReason::TargetReached
        } else {
            StopReason::Exhausted
        };
        Self::finish(state, reason, &mut on_event)
    }

    /// `word.tld` with a uniformly random TLD
    fn candidate(&mut self, word: &str) -> Option<String> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return None;
        }
        let tld = self.config.tlds.choose(&mut self.rng)?;
        Some(format!("{}.{}", word, tld))
    }

    async fn check<F>(
        &self,
        state: &mut SearchState,
        domain: String,
        phase: SearchPhase,
        on_event: &mut F,
    ) -> Step
    where
        F: FnMut(&SearchEvent<'_>),
    {
        if !state.mark_checked(&domain) {
            on_event(&SearchEvent::Skipped {
                phase,
                domain: &domain,
            });
            return Step::Continue;
        }

        let verdict = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::debug!(domain = %domain, "Query abandoned on cancellation");
                return Step::Cancelled;
            }
            verdict = self.oracle.verdict(&domain) => verdict,
        };

        on_event(&SearchEvent::Checked {
            phase,
            domain: &domain,
            verdict: &verdict,
            available: state.available_count() + usize::from(verdict.is_available()),
            target: self.config.count,
            attempts: state.attempts(),
        });
        state.record(domain, &verdict);
        Step::Continue
    }

    fn finish<F>(state: SearchState, reason: StopReason, on_event: &mut F) -> SearchOutcome
    where
        F: FnMut(&SearchEvent<'_>),
    {
        on_event(&SearchEvent::Finished(reason));
        tracing::info!(
            attempts = state.attempts(),
            available = state.available_count(),
            taken = state.taken_count(),
            reason = ?reason,
            "Search finished"
        );
        state.into_outcome(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainHuntError;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Oracle that answers from a fixed set of available domains
    struct StubOracle {
        available: HashSet<String>,
        calls: Mutex<Vec<String>>,
    }

    impl StubOracle {
        fn new(available: &[&str]) -> Self {
            Self {
                available: available.iter().map(|s| s.to_string()).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AvailabilityCheck for StubOracle {
        async fn verdict(&self, domain: &str) -> AvailabilityVerdict {
            self.calls.lock().unwrap().push(domain.to_string());
            if self.available.contains(domain) {
                AvailabilityVerdict::Available
            } else {
                AvailabilityVerdict::taken()
            }
        }
    }

    fn config(count: usize, tlds: &[&str], custom: &[&str]) -> SearchConfig {
        SearchConfig {
            count,
            tlds: tlds.iter().map(|s| s.to_string()).collect(),
            custom_words: custom.iter().map(|s| s.to_string()).collect(),
            seed: Some(42),
            ..Default::default()
        }
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_dog_cat_scenario() {
        let oracle = StubOracle::new(&["dog.io"]);
        let mut search = DomainSearch::new(oracle, config(2, &["io"], &[])).unwrap();

        let outcome = search.run(words(&["dog", "cat"]), |_| {}).await;

        assert_eq!(outcome.available, vec!["dog.io"]);
        assert_eq!(outcome.taken, vec!["cat.io"]);
        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.stop_reason, StopReason::Exhausted);
    }

    #[tokio::test]
    async fn test_zero_count_makes_no_queries() {
        let oracle = StubOracle::new(&["dog.io"]);
        let mut search = DomainSearch::new(oracle, config(0, &["io"], &["dog"])).unwrap();

        let outcome = search.run(words(&["dog", "cat"]), |_| {}).await;

        assert!(search.oracle().calls().is_empty());
        assert_eq!(outcome.attempts, 0);
        assert_eq!(outcome.stop_reason, StopReason::TargetReached);
    }

    #[tokio::test]
    async fn test_custom_words_satisfy_target() {
        let oracle = StubOracle::new(&["alpha.io", "beta.io", "gamma.io"]);
        let mut search =
            DomainSearch::new(oracle, config(2, &["io"], &["alpha", "beta", "gamma"])).unwrap();

        let mut phases = Vec::new();
        let outcome = search
            .run(words(&["dog", "cat"]), |event| {
                if let SearchEvent::PhaseStarted(phase) = event {
                    phases.push(*phase);
                }
            })
            .await;

        assert_eq!(search.oracle().calls(), vec!["alpha.io", "beta.io"]);
        assert_eq!(outcome.available, vec!["alpha.io", "beta.io"]);
        assert_eq!(phases, vec![SearchPhase::Custom]);
    }

    #[tokio::test]
    async fn test_custom_words_are_normalized() {
        let oracle = StubOracle::new(&["alpha.io"]);
        let mut search = DomainSearch::new(oracle, config(1, &["io"], &["  Alpha "])).unwrap();

        let outcome = search.run(Vec::new(), |_| {}).await;
        assert_eq!(outcome.available, vec!["alpha.io"]);
    }

    #[tokio::test]
    async fn test_never_queries_twice() {
        let oracle = StubOracle::new(&[]);
        let mut search =
            DomainSearch::new(oracle, config(5, &["io"], &["dog", "Dog"])).unwrap();

        let mut skipped = 0;
        let outcome = search
            .run(words(&["dog", "dog", "cat", "dog"]), |event| {
                if let SearchEvent::Skipped { .. } = event {
                    skipped += 1;
                }
            })
            .await;

        let calls = search.oracle().calls();
        let unique: HashSet<_> = calls.iter().collect();
        assert_eq!(calls.len(), unique.len());
        assert_eq!(calls.len(), 2);
        assert_eq!(outcome.attempts, 2);
        assert_eq!(skipped, 4);
        assert_eq!(outcome.stop_reason, StopReason::Exhausted);
    }

    #[tokio::test]
    async fn test_stops_at_target_in_dictionary() {
        let oracle = StubOracle::new(&["a.io", "b.io", "c.io", "d.io"]);
        let mut search = DomainSearch::new(oracle, config(2, &["io"], &[])).unwrap();

        let outcome = search.run(words(&["a", "b", "c", "d"]), |_| {}).await;

        assert_eq!(outcome.available.len(), 2);
        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.stop_reason, StopReason::TargetReached);
    }

    #[tokio::test]
    async fn test_custom_phase_falls_through_to_dictionary() {
        let oracle = StubOracle::new(&["cat.io"]);
        let mut search = DomainSearch::new(oracle, config(1, &["io"], &["zebra"])).unwrap();

        let outcome = search.run(words(&["cat"]), |_| {}).await;

        assert_eq!(search.oracle().calls(), vec!["zebra.io", "cat.io"]);
        assert_eq!(outcome.taken, vec!["zebra.io"]);
        assert_eq!(outcome.available, vec!["cat.io"]);
    }

    #[tokio::test]
    async fn test_tlds_drawn_from_pool() {
        let oracle = StubOracle::new(&[]);
        let mut search = DomainSearch::new(oracle, config(100, &["io", "dev"], &[])).unwrap();

        let pool: Vec<String> = (0..50).map(|i| format!("w{}", i)).collect();
        search.run(pool, |_| {}).await;

        let tlds: HashSet<String> = search
            .oracle()
            .calls()
            .iter()
            .filter_map(|d| d.rsplit_once('.').map(|(_, tld)| tld.to_string()))
            .collect();
        let expected: HashSet<String> = ["io", "dev"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tlds, expected);
    }

    #[tokio::test]
    async fn test_same_seed_same_order() {
        let pool = words(&["a", "b", "c", "d", "e", "f"]);

        let mut first = DomainSearch::new(StubOracle::new(&[]), config(3, &["io", "co"], &[])).unwrap();
        first.run(pool.clone(), |_| {}).await;
        let mut second = DomainSearch::new(StubOracle::new(&[]), config(3, &["io", "co"], &[])).unwrap();
        second.run(pool, |_| {}).await;

        assert_eq!(first.oracle().calls(), second.oracle().calls());
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let mut search = DomainSearch::new(StubOracle::new(&[]), config(3, &["io"], &["dog"]))
            .unwrap()
            .with_cancel_token(token);

        let outcome = search.run(words(&["cat"]), |_| {}).await;

        assert!(search.oracle().calls().is_empty());
        assert_eq!(outcome.stop_reason, StopReason::Cancelled);
    }

    #[tokio::test]
    async fn test_cancel_from_event_keeps_partial_results() {
        let token = CancelToken::new();
        let trigger = token.clone();
        let mut search = DomainSearch::new(StubOracle::new(&["a.io"]), config(10, &["io"], &[]))
            .unwrap()
            .with_cancel_token(token);

        let outcome = search
            .run(words(&["a", "b", "c"]), |event| {
                if let SearchEvent::Checked { .. } = event {
                    trigger.cancel();
                }
            })
            .await;

        assert_eq!(search.oracle().calls().len(), 1);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.stop_reason, StopReason::Cancelled);
    }

    #[test]
    fn test_empty_tlds_rejected() {
        let result = DomainSearch::new(StubOracle::new(&[]), config(1, &[], &[]));
        assert!(matches!(result, Err(DomainHuntError::Config { .. })));
    }
}
