//! Run-scoped search state

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{AvailabilityVerdict, StopReason};

/// Mutable state of one search run
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    checked: HashSet<String>,
    available: Vec<String>,
    taken: Vec<String>,
    attempts: u64,
    unknown: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a domain as checked; false if it already was
    pub fn mark_checked(&mut self, domain: &str) -> bool {
        if self.checked.contains(domain) {
            return false;
        }
        self.checked.insert(domain.to_string());
        self.attempts += 1;
        true
    }

    /// Record the verdict for a domain previously marked as checked
    pub fn record(&mut self, domain: String, verdict: &AvailabilityVerdict) {
        match verdict {
            AvailabilityVerdict::Available => self.available.push(domain),
            AvailabilityVerdict::Taken { .. } => self.taken.push(domain),
            AvailabilityVerdict::Unknown { .. } => {
                self.unknown += 1;
                self.taken.push(domain);
            }
        }
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn taken_count(&self) -> usize {
        self.taken.len()
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn into_outcome(self, stop_reason: StopReason) -> SearchOutcome {
        SearchOutcome {
            available: self.available,
            taken: self.taken,
            attempts: self.attempts,
            unknown: self.unknown,
            stop_reason,
        }
    }
}

/// Final result of a search run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Available domains in discovery order
    pub available: Vec<String>,
    /// Taken domains in query order, including failed lookups
    pub taken: Vec<String>,
    /// Number of oracle queries made
    pub attempts: u64,
    /// Taken domains whose lookup failed
    pub unknown: u64,
    pub stop_reason: StopReason,
}
