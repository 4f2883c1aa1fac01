use crate::domain::model::{CheckOutcome, DomainRecordReport, MailRecordPolicy};
use crate::domain::ports::DnsResolver;
use crate::utils::error::{CheckError, Result};

pub const SPF_PREFIX: &str = "v=spf1";
pub const DMARC_PREFIX: &str = "v=DMARC1";

pub struct DomainVerifier<R: DnsResolver> {
    resolver: R,
}

impl<R: DnsResolver> DomainVerifier<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Runs the MX, SPF and DMARC lookups in order. The first lookup that fails
    /// to resolve aborts the whole verification; empty answers do not.
    pub async fn verify(&self, domain: &str) -> Result<DomainRecordReport> {
        if domain.is_empty() {
            return Err(CheckError::dns("MX", domain, "empty domain"));
        }

        let mut report = DomainRecordReport::new(domain);

        let mx_records = self.resolver.mx_lookup(domain).await?;
        report.has_mx = !mx_records.is_empty();
        tracing::debug!("{} MX record(s) for {}", mx_records.len(), domain);

        let txt_records = self.resolver.txt_lookup(domain).await?;
        if let Some(spf) = first_with_prefix(&txt_records, SPF_PREFIX) {
            report.has_spf = true;
            report.spf_record = spf.to_string();
        }

        let dmarc_name = format!("_dmarc.{}", domain);
        let dmarc_records = self
            .resolver
            .txt_lookup(&dmarc_name)
            .await
            .map_err(|e| match e {
                CheckError::DnsLookupError { name, message, .. } => {
                    CheckError::dns("DMARC", &name, message)
                }
                other => other,
            })?;
        if let Some(dmarc) = first_with_prefix(&dmarc_records, DMARC_PREFIX) {
            report.has_dmarc = true;
            report.dmarc_record = dmarc.to_string();
        }

        Ok(report)
    }
}

/// Whether a verified domain passes on to the syntax check under `policy`.
pub fn domain_outcome(report: &DomainRecordReport, policy: MailRecordPolicy) -> CheckOutcome {
    match policy {
        MailRecordPolicy::AnyResolvable => CheckOutcome::ResolvedPositive,
        MailRecordPolicy::RequireMx => CheckOutcome::from_bool(report.has_mx),
    }
}

fn first_with_prefix<'a>(records: &'a [String], prefix: &str) -> Option<&'a str> {
    records
        .iter()
        .map(String::as_str)
        .find(|record| record.starts_with(prefix))
}
