//! Domain Hunt - find available domain names from dictionary words
//!
//! Samples words from a dictionary (plus your own custom words), pairs them with
//! TLDs and checks each candidate with WHOIS, cross-checked against DNS.

pub mod cli;
pub mod domain;
pub mod error;
pub mod report;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use error::{DomainHuntError, Result};
pub use types::{
    AvailabilityVerdict, CheckConfig, CorpusSource, ReportConfig, SearchConfig, SearchPhase,
    StopReason, WhoisRecord,
};

// Re-export main functionality
pub use domain::{AvailabilityCheck, AvailabilityOracle};
pub use search::{DomainSearch, SearchOutcome};

use tracing_subscriber::EnvFilter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library: load `.env` and install the log subscriber.
///
/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`). Calling this
/// more than once is harmless.
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    Ok(())
}
