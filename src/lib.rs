pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::SystemDnsResolver;
pub use config::CheckSettings;
pub use crate::core::{engine::EmailCheckEngine, report::ReportWriter};
pub use domain::model::{CheckOutcome, CheckReport, DomainExtraction, DomainRecordReport, MailRecordPolicy};
pub use utils::error::{CheckError, Result};
