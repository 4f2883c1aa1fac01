use super::settings::{policy_for, CheckSettings};
use super::toml_config::TomlConfig;
use crate::domain::model::DomainExtraction;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mail-probe")]
#[command(
    about = "Checks the email address on the first line of stdin: mail DNS records, syntax and deliverability"
)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verification API endpoint
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Verification API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// How the domain is taken from the address
    #[arg(long, value_enum)]
    pub domain_extraction: Option<DomainExtraction>,

    /// Only continue past the DNS stage when the domain has an MX record
    #[arg(long)]
    pub require_mx: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then command-line flags.
    pub fn settings(&self) -> Result<CheckSettings> {
        let mut settings = CheckSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from: {}", path.display());
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings.apply_file(file);
        }

        if let Some(endpoint) = &self.api_endpoint {
            settings.api.endpoint = Some(endpoint.clone());
        }
        if let Some(api_key) = &self.api_key {
            settings.api.api_key = Some(api_key.clone());
        }
        if let Some(extraction) = self.domain_extraction {
            settings.domain_extraction = extraction;
        }
        if self.require_mx {
            settings.mail_record_policy = policy_for(true);
        }

        settings.validate()?;
        Ok(settings)
    }
}
