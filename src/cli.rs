//! Command line surface

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::domain::{get_tld_list, LabelValidator};
use crate::error::{DomainHuntError, Result};
use crate::search::DEFAULT_SHORTEST;
use crate::types::{CheckConfig, CorpusSource, ReportConfig, SearchConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "domain-hunt", version)]
#[command(about = "Find available domains by sampling dictionary words", long_about = None)]
pub struct Cli {
    /// Number of available domains to find
    #[arg(short, long, default_value_t = 10)]
    pub count: usize,

    /// TLDs to try (a preset name such as `popular` expands to a list)
    #[arg(short, long = "tld", num_args = 1.., default_value = "com")]
    pub tld: Vec<String>,

    /// Only use dictionary words starting with this string
    #[arg(short, long)]
    pub startswith: Option<String>,

    /// Only use dictionary words ending with this string
    #[arg(short, long)]
    pub endswith: Option<String>,

    /// Words to check first, each with a random TLD
    #[arg(long = "customwords", num_args = 1..)]
    pub custom_words: Vec<String>,

    /// Print every checked domain
    #[arg(short, long)]
    pub verbose: bool,

    /// Also print the 15 shortest available domains
    #[arg(long)]
    pub shortest: bool,

    /// Word list file, one word per line (defaults to the built-in list)
    #[arg(short, long, env = "DOMAIN_HUNT_WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long, env = "DOMAIN_HUNT_SEED")]
    pub seed: Option<u64>,

    /// WHOIS timeout in seconds
    #[arg(long, env = "DOMAIN_HUNT_WHOIS_TIMEOUT", default_value_t = 10)]
    pub whois_timeout: u64,

    /// DNS timeout in seconds
    #[arg(long, env = "DOMAIN_HUNT_DNS_TIMEOUT", default_value_t = 5)]
    pub dns_timeout: u64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Validate and convert into the search configuration
    pub fn search_config(&self) -> Result<SearchConfig> {
        let validator = LabelValidator::new();

        let mut tlds = Vec::new();
        for raw in &self.tld {
            match get_tld_list(raw.trim()) {
                Some(preset) => tlds.extend(preset),
                None => tlds.push(validator.validate_tld(raw)?),
            }
        }
        if tlds.is_empty() {
            return Err(DomainHuntError::cli("At least one TLD is required"));
        }

        let custom_words = self
            .custom_words
            .iter()
            .map(|w| validator.validate_word(w))
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchConfig {
            count: self.count,
            tlds,
            custom_words,
            startswith: non_empty_lowercase(self.startswith.as_deref()),
            endswith: non_empty_lowercase(self.endswith.as_deref()),
            seed: self.seed,
        })
    }

    pub fn check_config(&self) -> Result<CheckConfig> {
        if self.whois_timeout == 0 || self.dns_timeout == 0 {
            return Err(DomainHuntError::cli("Timeouts must be at least one second"));
        }
        Ok(CheckConfig {
            whois_timeout: Duration::from_secs(self.whois_timeout),
            dns_timeout: Duration::from_secs(self.dns_timeout),
            ..Default::default()
        })
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            verbose: self.verbose,
            shortest: self.shortest.then_some(DEFAULT_SHORTEST),
            json: self.json,
        }
    }

    pub fn corpus_source(&self) -> CorpusSource {
        match &self.wordlist {
            Some(path) => CorpusSource::File(path.clone()),
            None => CorpusSource::Builtin,
        }
    }
}

fn non_empty_lowercase(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}
