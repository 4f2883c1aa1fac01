use serde::{Deserialize, Serialize};

/// How the domain is cut out of an address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DomainExtraction {
    /// Text between the first and second `@`; anything after a second `@` is dropped.
    #[default]
    Segment,
    /// Everything after the first `@`.
    Remainder,
}

/// When a resolved domain is allowed through to syntax and deliverability checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MailRecordPolicy {
    /// Any domain whose three lookups complete, even with no records at all.
    #[default]
    AnyResolvable,
    /// Only domains publishing at least one MX record.
    RequireMx,
}

/// Result of one check. Keeps "could not check" apart from "checked and negative".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum CheckOutcome {
    NotAttempted,
    TransportError(String),
    ResolvedNegative,
    ResolvedPositive,
}

impl CheckOutcome {
    pub fn is_positive(&self) -> bool {
        matches!(self, CheckOutcome::ResolvedPositive)
    }

    pub fn from_bool(found: bool) -> Self {
        if found {
            CheckOutcome::ResolvedPositive
        } else {
            CheckOutcome::ResolvedNegative
        }
    }
}

/// Mail-related DNS records of one domain. Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainRecordReport {
    pub domain: String,
    pub has_mx: bool,
    pub has_spf: bool,
    pub spf_record: String,
    pub has_dmarc: bool,
    pub dmarc_record: String,
}

impl DomainRecordReport {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub email: String,
    pub domain: String,
    pub records: Option<DomainRecordReport>,
    pub domain_check: CheckOutcome,
    pub syntax: CheckOutcome,
    pub deliverability: CheckOutcome,
}

impl CheckReport {
    pub fn new(email: &str, domain: &str) -> Self {
        Self {
            email: email.to_string(),
            domain: domain.to_string(),
            records: None,
            domain_check: CheckOutcome::NotAttempted,
            syntax: CheckOutcome::NotAttempted,
            deliverability: CheckOutcome::NotAttempted,
        }
    }
}
