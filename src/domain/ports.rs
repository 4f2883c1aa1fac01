use crate::domain::model::{DomainExtraction, MailRecordPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;

/// DNS queries needed to verify a mail domain.
///
/// A lookup that completes with no records must return `Ok(vec![])`; only
/// failures to resolve at all (NXDOMAIN, timeouts, network errors) are `Err`.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Mail exchanger host names for `domain`.
    async fn mx_lookup(&self, domain: &str) -> Result<Vec<String>>;

    /// TXT records for `name`, each record's character-strings joined into one string.
    async fn txt_lookup(&self, name: &str) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> Option<&str>;
    fn api_key(&self) -> Option<&str>;
    fn domain_extraction(&self) -> DomainExtraction;
    fn mail_record_policy(&self) -> MailRecordPolicy;
}
