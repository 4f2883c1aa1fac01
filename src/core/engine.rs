use crate::core::deliverability::DeliverabilityChecker;
use crate::core::extractor::extract_domain;
use crate::core::report::ReportWriter;
use crate::core::syntax::is_valid_email;
use crate::core::verifier::{domain_outcome, DomainVerifier};
use crate::domain::model::{CheckOutcome, CheckReport};
use crate::domain::ports::{ConfigProvider, DnsResolver};
use crate::utils::error::Result;
use std::io::Write;

pub struct EmailCheckEngine<R: DnsResolver, C: ConfigProvider> {
    verifier: DomainVerifier<R>,
    checker: DeliverabilityChecker<C>,
}

impl<R: DnsResolver, C: ConfigProvider> EmailCheckEngine<R, C> {
    pub fn new(resolver: R, config: C) -> Self {
        Self {
            verifier: DomainVerifier::new(resolver),
            checker: DeliverabilityChecker::new(config),
        }
    }

    /// Checks one address: domain records, then syntax, then deliverability.
    /// Each stage runs only if the previous one came back positive.
    ///
    /// Check failures are recorded in the returned report; `Err` means the
    /// output could not be written.
    pub async fn run<W: Write>(
        &self,
        email: &str,
        writer: &mut ReportWriter<W>,
    ) -> Result<CheckReport> {
        let config = self.checker.config();
        let domain = extract_domain(email, config.domain_extraction());
        let mut report = CheckReport::new(email, domain);

        tracing::debug!("Verifying mail records for domain '{}'", domain);
        let records = match self.verifier.verify(domain).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Error: {}", e);
                report.domain_check = CheckOutcome::TransportError(e.to_string());
                return Ok(report);
            }
        };

        writer.write_records(&records)?;
        report.domain_check = domain_outcome(&records, config.mail_record_policy());
        report.records = Some(records);

        if !report.domain_check.is_positive() {
            tracing::info!("No MX record for {}, skipping remaining checks", domain);
            return Ok(report);
        }

        let valid = is_valid_email(email);
        report.syntax = CheckOutcome::from_bool(valid);
        writer.write_syntax_status(valid)?;

        if !valid {
            return Ok(report);
        }

        report.deliverability = self.checker.check(email).await;
        writer.write_usage_status(report.deliverability.is_positive())?;

        Ok(report)
    }
}
