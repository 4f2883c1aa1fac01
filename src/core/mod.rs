pub mod deliverability;
pub mod engine;
pub mod extractor;
pub mod input;
pub mod report;
pub mod syntax;
pub mod verifier;

pub use crate::domain::model::{CheckOutcome, CheckReport, DomainRecordReport};
pub use crate::domain::ports::{ConfigProvider, DnsResolver};
pub use crate::utils::error::Result;
