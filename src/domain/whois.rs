//! WHOIS client (pure Rust, TCP port 43)

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use super::{LabelValidator, WhoisLookup};
use crate::error::{DomainHuntError, Result};
use crate::types::{CheckConfig, WhoisRecord};

const WHOIS_PORT: u16 = 43;
const IANA_SERVER: &str = "whois.iana.org";

/// Status values some registries print for unregistered names
const FREE_STATUSES: &[&str] = &["free", "available", "not registered", "no object found"];

const RATE_LIMIT_PATTERNS: &[&str] = &[
    "limit exceeded",
    "quota exceeded",
    "too many requests",
    "rate limit",
];

const STATUS_KEYS: &[&str] = &["domain status", "status"];
const REGISTRAR_KEYS: &[&str] = &["registrar", "registrar name", "sponsoring registrar"];
const CREATION_KEYS: &[&str] = &["creation date", "created", "created on", "registered", "registration time"];
const EXPIRATION_KEYS: &[&str] = &[
    "registry expiry date",
    "registrar registration expiration date",
    "expiration date",
    "expiry date",
    "expires",
    "paid-till",
];
const NAMESERVER_KEYS: &[&str] = &["name server", "nameserver", "nserver"];
const REFERRAL_KEYS: &[&str] = &["registrar whois server"];

/// WHOIS client for registration lookups
pub struct WhoisClient {
    timeout: Duration,
    follow_referrals: bool,
    validator: LabelValidator,
}

impl WhoisClient {
    pub fn new() -> Self {
        Self::with_config(&CheckConfig::default())
    }

    pub fn with_config(config: &CheckConfig) -> Self {
        Self {
            timeout: config.whois_timeout,
            follow_referrals: config.follow_referrals,
            validator: LabelValidator::new(),
        }
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs().max(1)
    }

    /// Find the authoritative WHOIS server for a TLD
    async fn server_for_tld(&self, tld: &str) -> Result<String> {
        if let Some(server) = Self::whois_server_for_tld(tld) {
            return Ok(server.to_string());
        }

        // Unknown TLD: ask IANA for the registry's server.
        let iana = self.query_whois(IANA_SERVER, tld).await?;
        Self::parse_iana_whois_server(&iana)
            .or_else(|| Self::parse_iana_refer_server(&iana))
            .ok_or_else(|| {
                DomainHuntError::whois(
                    tld,
                    format!("No WHOIS server found for TLD: {}", tld),
                    Some(IANA_SERVER.to_string()),
                )
            })
    }

    fn whois_server_for_tld(tld: &str) -> Option<&'static str> {
        match tld {
            "com" | "net" => Some("whois.verisign-grs.com"),
            "org" => Some("whois.pir.org"),
            "io" => Some("whois.nic.io"),
            "ai" => Some("whois.nic.ai"),
            "co" => Some("whois.nic.co"),
            "me" => Some("whois.nic.me"),
            "xyz" => Some("whois.nic.xyz"),
            "dev" | "app" => Some("whois.nic.google"),
            _ => None,
        }
    }

    async fn query_whois(&self, server: &str, query: &str) -> Result<String> {
        let addr = format!("{}:{}", server, WHOIS_PORT);
        let mut stream = timeout(self.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| DomainHuntError::timeout("WHOIS connect", self.timeout_secs()))?
            .map_err(|e| DomainHuntError::network(format!("WHOIS connect failed: {}", e), Some(addr.clone())))?;

        Self::exchange(&mut stream, query, self.timeout, &addr).await
    }

    /// Send one query and read the whole answer
    async fn exchange<S>(stream: &mut S, query: &str, limit: Duration, addr: &str) -> Result<String>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let secs = limit.as_secs().max(1);

        timeout(limit, stream.write_all(format!("{}\r\n", query).as_bytes()))
            .await
            .map_err(|_| DomainHuntError::timeout("WHOIS write", secs))?
            .map_err(|e| DomainHuntError::network(format!("WHOIS write failed: {}", e), Some(addr.to_string())))?;

        let mut buf = Vec::new();
        timeout(limit, stream.read_to_end(&mut buf))
            .await
            .map_err(|_| DomainHuntError::timeout("WHOIS read", secs))?
            .map_err(|e| DomainHuntError::network(format!("WHOIS read failed: {}", e), Some(addr.to_string())))?;

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Turn a raw WHOIS answer into a record.
    ///
    /// Empty answers and registry throttling notices are errors; a "no match"
    /// answer is a record with no status.
    pub fn parse_response(raw: &str, domain: &str) -> Result<WhoisRecord> {
        if raw.trim().is_empty() {
            return Err(DomainHuntError::parse(
                format!("Empty WHOIS response for {}", domain),
                None,
            ));
        }

        let lower = raw.to_lowercase();
        if let Some(pattern) = RATE_LIMIT_PATTERNS.iter().find(|p| lower.contains(**p)) {
            return Err(DomainHuntError::rate_limit(
                format!("WHOIS server refused {} ({})", domain, pattern),
                None,
            ));
        }

        let status = field_values(raw, STATUS_KEYS)
            .iter()
            .filter(|value| !FREE_STATUSES.contains(&value.to_lowercase().as_str()))
            .filter_map(|value| value.split_whitespace().next())
            .map(str::to_string)
            .collect();

        let mut nameservers: Vec<String> = Vec::new();
        for ns in field_values(raw, NAMESERVER_KEYS) {
            let ns = ns.split_whitespace().next().unwrap_or_default().to_lowercase();
            if !ns.is_empty() && !nameservers.contains(&ns) {
                nameservers.push(ns);
            }
        }

        Ok(WhoisRecord {
            domain: domain.to_string(),
            status,
            registrar: field_values(raw, REGISTRAR_KEYS).into_iter().next(),
            creation_date: field_values(raw, CREATION_KEYS).iter().find_map(|d| parse_date(d)),
            expiration_date: field_values(raw, EXPIRATION_KEYS).iter().find_map(|d| parse_date(d)),
            nameservers,
        })
    }

    fn parse_referral(raw: &str) -> Option<String> {
        field_values(raw, REFERRAL_KEYS)
            .into_iter()
            .map(|s| {
                s.trim_start_matches("whois://")
                    .trim_end_matches('/')
                    .to_lowercase()
            })
            .find(|s| !s.is_empty())
    }

    fn parse_iana_whois_server(iana: &str) -> Option<String> {
        field_values(iana, &["whois"]).into_iter().next()
    }

    fn parse_iana_refer_server(iana: &str) -> Option<String> {
        field_values(iana, &["refer"]).into_iter().next()
    }

    /// Thin registries leave out fields the registrar's server carries
    fn needs_referral(record: &WhoisRecord) -> bool {
        record.registrar.is_none() || record.creation_date.is_none() || record.expiration_date.is_none()
    }

    /// Fill gaps in the registry record from the registrar's answer
    async fn enrich_from_referral(&self, record: &mut WhoisRecord, server: &str) {
        let answer = self.query_whois(server, &record.domain).await;
        Self::merge_referral(record, server, answer);
    }

    /// Merge a registrar answer into the registry record.
    ///
    /// Registry values win; a failed or unparsable answer leaves the record as is.
    fn merge_referral(record: &mut WhoisRecord, server: &str, answer: Result<String>) {
        let referred = match answer.and_then(|raw| Self::parse_response(&raw, &record.domain)) {
            Ok(referred) => referred,
            Err(e) => {
                tracing::debug!(domain = %record.domain, server = %server, error = %e, "Ignoring registrar WHOIS answer");
                return;
            }
        };

        record.registrar = record.registrar.take().or(referred.registrar);
        record.creation_date = record.creation_date.or(referred.creation_date);
        record.expiration_date = record.expiration_date.or(referred.expiration_date);
        if record.nameservers.is_empty() {
            record.nameservers = referred.nameservers;
        }
    }
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhoisLookup for WhoisClient {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord> {
        let (_, tld) = self.validator.split_domain(domain)?;
        let tld = tld.to_lowercase();

        let server = self.server_for_tld(&tld).await?;
        let raw = self.query_whois(&server, domain).await?;

        let mut record = Self::parse_response(&raw, domain).map_err(|e| match e {
            DomainHuntError::RateLimit { message, .. } => {
                DomainHuntError::rate_limit(message, Some(server.clone()))
            }
            other => other,
        })?;

        if self.follow_referrals && record.is_registered() && Self::needs_referral(&record) {
            if let Some(referral) = Self::parse_referral(&raw).filter(|r| *r != server) {
                self.enrich_from_referral(&mut record, &referral).await;
            }
        }

        tracing::debug!(
            domain = %domain,
            server = %server,
            status = ?record.status,
            registrar = ?record.registrar,
            expires = ?record.expiration_date,
            "WHOIS lookup completed"
        );

        Ok(record)
    }
}

/// Values of `key: value` lines whose key matches one of `keys` (case-insensitive)
fn field_values(raw: &str, keys: &[&str]) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('%') && !line.starts_with('#'))
        .filter_map(|line| line.split_once(':'))
        .filter(|(key, _)| keys.contains(&key.trim().to_lowercase().as_str()))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S UTC", "%Y-%m-%dT%H:%M:%S"];
    for format in &datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(dt.and_utc());
        }
    }

    let date_formats = ["%Y-%m-%d", "%d-%b-%Y", "%d.%m.%Y", "%Y.%m.%d"];
    for format in &date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}
