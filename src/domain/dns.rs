//! DNS cross-check through the system resolver

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use super::HostResolver;
use crate::types::CheckConfig;

/// Resolver backed by `getaddrinfo` via tokio
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new() -> Self {
        Self::with_config(&CheckConfig::default())
    }

    pub fn with_config(config: &CheckConfig) -> Self {
        Self {
            timeout: config.dns_timeout,
        }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolves(&self, domain: &str) -> bool {
        resolves_within(self.timeout, domain, tokio::net::lookup_host((domain, 0))).await
    }
}

/// Await a host lookup under `limit`; an unanswered lookup counts as resolving
async fn resolves_within<F, I>(limit: Duration, domain: &str, lookup: F) -> bool
where
    F: Future<Output = io::Result<I>>,
    I: Iterator<Item = SocketAddr>,
{
    match timeout(limit, lookup).await {
        Ok(Ok(mut addrs)) => addrs.next().is_some(),
        Ok(Err(e)) => {
            tracing::debug!(domain = %domain, error = %e, "Host not found");
            false
        }
        Err(_) => {
            tracing::warn!(
                domain = %domain,
                timeout_ms = %limit.as_millis(),
                "DNS lookup timed out, treating domain as resolving"
            );
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_localhost_resolves() {
        let resolver = SystemResolver::new();
        assert!(resolver.resolves("localhost").await);
    }

    type Addrs = std::vec::IntoIter<SocketAddr>;

    #[tokio::test]
    async fn test_stalled_lookup_counts_as_resolving() {
        let stalled = std::future::pending::<io::Result<Addrs>>();
        assert!(resolves_within(Duration::from_millis(1), "slow.io", stalled).await);
    }

    #[tokio::test]
    async fn test_lookup_error_means_not_found() {
        let failed = async { Err::<Addrs, _>(io::Error::new(io::ErrorKind::NotFound, "nxdomain")) };
        assert!(!resolves_within(Duration::from_secs(1), "free.io", failed).await);
    }

    #[tokio::test]
    async fn test_empty_answer_means_not_found() {
        let empty = async { Ok::<Addrs, io::Error>(Vec::new().into_iter()) };
        assert!(!resolves_within(Duration::from_secs(1), "free.io", empty).await);

        let answered = async { Ok::<Addrs, io::Error>(vec![SocketAddr::from(([127, 0, 0, 1], 0))].into_iter()) };
        assert!(resolves_within(Duration::from_secs(1), "taken.io", answered).await);
    }

    #[tokio::test]
    async fn test_timeout_is_configurable() {
        let config = CheckConfig {
            dns_timeout: Duration::from_millis(250),
            ..Default::default()
        };
        let resolver = SystemResolver::with_config(&config);
        assert_eq!(resolver.timeout, Duration::from_millis(250));
    }
}
