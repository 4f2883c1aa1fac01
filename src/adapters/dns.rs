use crate::domain::ports::DnsResolver;
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use trust_dns_resolver::{
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
    system_conf::read_system_conf,
    TokioAsyncResolver,
};

/// `DnsResolver` backed by the host's resolver configuration.
pub struct SystemDnsResolver {
    resolver: TokioAsyncResolver,
}

impl SystemDnsResolver {
    /// Reads `/etc/resolv.conf` (or the platform equivalent); falls back to the
    /// library's default upstreams when the system config cannot be read.
    pub fn new() -> Self {
        let (config, opts) = read_system_conf().unwrap_or_else(|e| {
            tracing::warn!("Failed to read system DNS config, using defaults: {}", e);
            (ResolverConfig::default(), ResolverOpts::default())
        });
        Self::with_config(config, opts)
    }

    pub fn with_config(config: ResolverConfig, opts: ResolverOpts) -> Self {
        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

impl Default for SystemDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for SystemDnsResolver {
    async fn mx_lookup(&self, domain: &str) -> Result<Vec<String>> {
        match self.resolver.mx_lookup(domain).await {
            Ok(lookup) => Ok(lookup.iter().map(|mx| mx.exchange().to_utf8()).collect()),
            Err(err) => empty_or_error(err, "MX", domain),
        }
    }

    async fn txt_lookup(&self, name: &str) -> Result<Vec<String>> {
        match self.resolver.txt_lookup(name).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|txt| {
                    txt.txt_data()
                        .iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<_>>()
                        .join("")
                })
                .collect()),
            Err(err) => empty_or_error(err, "TXT", name),
        }
    }
}

/// NODATA (the name exists but has no records of this type) is an empty answer,
/// everything else is a failed lookup.
fn empty_or_error(err: ResolveError, record_type: &str, name: &str) -> Result<Vec<String>> {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NoError =>
        {
            tracing::debug!("No {} records for {}", record_type, name);
            Ok(Vec::new())
        }
        _ => Err(CheckError::dns(record_type, name, err.to_string())),
    }
}
