use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tokio::time::timeout;

/// Validation oracle for hostnames: answers whether a hostname currently
/// resolves to at least one network address. The registry treats the
/// answer as a yes/no gate and never inspects the addresses themselves.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolves(&self, hostname: &str) -> bool;
}

/// Oracle backed by the system resolver via `tokio::net::lookup_host`.
///
/// Each lookup is bounded by `lookup_timeout`; a lookup that errors or
/// exceeds the bound counts as "does not resolve".
pub struct DnsResolver {
    lookup_timeout: Duration,
}

impl DnsResolver {
    pub fn new(lookup_timeout: Duration) -> Self {
        Self { lookup_timeout }
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolves(&self, hostname: &str) -> bool {
        // lookup_host wants a host:port pair; the port is irrelevant to
        // the yes/no answer.
        let target = format!("{hostname}:80");
        match timeout(self.lookup_timeout, lookup_host(target)).await {
            Ok(Ok(mut addrs)) => addrs.next().is_some(),
            Ok(Err(err)) => {
                tracing::debug!(hostname, error = %err, "hostname lookup failed");
                false
            }
            Err(_) => {
                tracing::debug!(hostname, "hostname lookup timed out");
                false
            }
        }
    }
}

/// Fixed-outcome oracle. Stands in for DNS when validation is configured
/// off, and in tests.
pub struct StaticResolver {
    outcome: bool,
}

impl StaticResolver {
    /// Oracle that accepts every hostname.
    pub fn accepting() -> Self {
        Self { outcome: true }
    }

    /// Oracle that rejects every hostname.
    pub fn rejecting() -> Self {
        Self { outcome: false }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolves(&self, _hostname: &str) -> bool {
        self.outcome
    }
}
