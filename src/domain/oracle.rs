//! Availability decision: WHOIS first, DNS as a cross-check

use std::time::Instant;

use async_trait::async_trait;

use super::{AvailabilityCheck, HostResolver, SystemResolver, WhoisClient, WhoisLookup};
use crate::types::{AvailabilityVerdict, CheckConfig};

/// Combines a WHOIS source and a resolver into one verdict per domain.
///
/// A registration status in WHOIS always wins. Without one, a domain that
/// still resolves in DNS is taken. Any WHOIS failure yields
/// [`AvailabilityVerdict::Unknown`], which callers count as taken.
pub struct AvailabilityOracle<W, D> {
    whois: W,
    resolver: D,
}

impl AvailabilityOracle<WhoisClient, SystemResolver> {
    /// Oracle backed by the network clients
    pub fn from_config(config: &CheckConfig) -> Self {
        Self::new(
            WhoisClient::with_config(config),
            SystemResolver::with_config(config),
        )
    }
}

impl<W, D> AvailabilityOracle<W, D>
where
    W: WhoisLookup,
    D: HostResolver,
{
    pub fn new(whois: W, resolver: D) -> Self {
        Self { whois, resolver }
    }
}

#[async_trait]
impl<W, D> AvailabilityCheck for AvailabilityOracle<W, D>
where
    W: WhoisLookup,
    D: HostResolver,
{
    async fn verdict(&self, domain: &str) -> AvailabilityVerdict {
        let start_time = Instant::now();

        let verdict = match self.whois.lookup(domain).await {
            Ok(record) if record.is_registered() => AvailabilityVerdict::Taken {
                registrar: record.registrar,
            },
            Ok(record) => {
                if self.resolver.resolves(domain).await {
                    tracing::debug!(domain = %domain, "No WHOIS status but host resolves");
                    AvailabilityVerdict::Taken {
                        registrar: record.registrar,
                    }
                } else {
                    AvailabilityVerdict::Available
                }
            }
            Err(e) => {
                if e.is_transport() {
                    tracing::warn!(domain = %domain, error = %e, "WHOIS server unreachable, counting as taken");
                } else {
                    tracing::debug!(domain = %domain, error = %e, "WHOIS lookup failed, counting as taken");
                }
                AvailabilityVerdict::Unknown {
                    reason: e.to_string(),
                }
            }
        };

        tracing::debug!(
            domain = %domain,
            verdict = %verdict,
            duration_ms = %start_time.elapsed().as_millis(),
            "Availability check completed"
        );

        verdict
    }
}
