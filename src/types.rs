//! Core types and structures for domain-hunt

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a single availability query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AvailabilityVerdict {
    Available,
    Taken { registrar: Option<String> },
    /// The lookup failed; counted as taken.
    Unknown { reason: String },
}

impl AvailabilityVerdict {
    pub fn taken() -> Self {
        Self::Taken { registrar: None }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl std::fmt::Display for AvailabilityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityVerdict::Available => write!(f, "available"),
            AvailabilityVerdict::Taken { .. } => write!(f, "taken"),
            AvailabilityVerdict::Unknown { .. } => write!(f, "unknown"),
        }
    }
}

/// Parsed WHOIS answer for a domain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhoisRecord {
    pub domain: String,
    /// Registration status codes; empty when the registry has no registration.
    pub status: Vec<String>,
    pub registrar: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub nameservers: Vec<String>,
}

impl WhoisRecord {
    /// Whether the registry reported any registration status
    pub fn is_registered(&self) -> bool {
        !self.status.is_empty()
    }
}

/// Which part of the search produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPhase {
    Custom,
    Dictionary,
}

impl std::fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchPhase::Custom => write!(f, "custom"),
            SearchPhase::Dictionary => write!(f, "dictionary"),
        }
    }
}

/// Why a search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The requested number of available domains was found
    TargetReached,
    /// Every word in the pool was drawn
    Exhausted,
    /// The run was interrupted
    Cancelled,
}

/// Configuration for a search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of available domains to find
    pub count: usize,
    /// TLDs to combine with words (without leading dot)
    pub tlds: Vec<String>,
    /// Words checked before the dictionary
    pub custom_words: Vec<String>,
    /// Keep only dictionary words with this prefix
    pub startswith: Option<String>,
    /// Keep only dictionary words with this suffix
    pub endswith: Option<String>,
    /// Seed for reproducible sampling
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            count: 10,
            tlds: vec!["com".to_string()],
            custom_words: Vec::new(),
            startswith: None,
            endswith: None,
            seed: None,
        }
    }
}

/// Configuration for availability checking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub whois_timeout: Duration,
    pub dns_timeout: Duration,
    /// Follow registrar referrals from thin registries
    pub follow_referrals: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            whois_timeout: Duration::from_secs(10),
            dns_timeout: Duration::from_secs(5),
            follow_referrals: true,
        }
    }
}

/// Output options
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub verbose: bool,
    /// Print the N shortest available domains
    pub shortest: Option<usize>,
    pub json: bool,
}

/// Where the dictionary comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorpusSource {
    #[default]
    Builtin,
    File(PathBuf),
}
