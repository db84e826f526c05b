//! Domain availability checking module

pub mod dns;
pub mod oracle;
pub mod validator;
pub mod whois;

// Re-export main functionality
pub use dns::SystemResolver;
pub use oracle::AvailabilityOracle;
pub use validator::LabelValidator;
pub use whois::WhoisClient;

use crate::error::Result;
use crate::types::{AvailabilityVerdict, WhoisRecord};
use async_trait::async_trait;

/// Source of WHOIS registration data
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    /// Look up registration data for a fully-qualified domain
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord>;
}

/// Host name resolution
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Whether the domain resolves to at least one address
    async fn resolves(&self, domain: &str) -> bool;
}

/// Anything that can answer "is this domain free?"
#[async_trait]
pub trait AvailabilityCheck: Send + Sync {
    async fn verdict(&self, domain: &str) -> AvailabilityVerdict;

    async fn is_available(&self, domain: &str) -> bool {
        self.verdict(domain).await.is_available()
    }
}

/// Common TLD lists
pub const POPULAR_TLDS: &[&str] = &[
    "com", "org", "net", "io", "ai", "co", "me", "app", "dev", "tech", "xyz"
];

pub const STARTUP_TLDS: &[&str] = &[
    "com", "org", "io", "ai", "tech", "app", "dev", "xyz"
];

pub const ENTERPRISE_TLDS: &[&str] = &[
    "com", "org", "net", "biz", "info", "us"
];

pub const COUNTRY_TLDS: &[&str] = &[
    "us", "uk", "de", "fr", "ca", "au", "jp", "br", "in"
];

/// Get TLD list by preset name
pub fn get_tld_list(name: &str) -> Option<Vec<String>> {
    let list = match name.to_lowercase().as_str() {
        "popular" => POPULAR_TLDS,
        "startup" => STARTUP_TLDS,
        "enterprise" => ENTERPRISE_TLDS,
        "country" => COUNTRY_TLDS,
        _ => return None,
    };
    Some(list.iter().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(get_tld_list("Startup").map(|l| l.len()), Some(STARTUP_TLDS.len()));
        assert!(get_tld_list("com").is_none());
        for name in ["popular", "startup", "enterprise", "country"] {
            assert!(get_tld_list(name).is_some());
        }
    }
}
