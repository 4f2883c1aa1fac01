use crate::config::toml_config::{ApiConfig, TomlConfig};
use crate::core::ConfigProvider;
use crate::domain::model::{DomainExtraction, MailRecordPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.zerobounce.net/v2/validate";

/// Settings after merging defaults, the optional TOML file and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    pub api: ApiConfig,
    pub domain_extraction: DomainExtraction,
    pub mail_record_policy: MailRecordPolicy,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: Some(DEFAULT_API_ENDPOINT.to_string()),
                api_key: None,
            },
            domain_extraction: DomainExtraction::default(),
            mail_record_policy: MailRecordPolicy::default(),
        }
    }
}

impl CheckSettings {
    /// Overlays values present in `file`; absent values keep their current setting.
    pub fn apply_file(&mut self, file: TomlConfig) {
        if let Some(endpoint) = file.api.endpoint {
            self.api.endpoint = Some(endpoint);
        }
        if let Some(api_key) = file.api.api_key {
            self.api.api_key = Some(api_key);
        }
        if let Some(extraction) = file.checks.domain_extraction {
            self.domain_extraction = extraction;
        }
        if let Some(require_mx) = file.checks.require_mx {
            self.mail_record_policy = policy_for(require_mx);
        }
    }
}

pub fn policy_for(require_mx: bool) -> MailRecordPolicy {
    if require_mx {
        MailRecordPolicy::RequireMx
    } else {
        MailRecordPolicy::AnyResolvable
    }
}

impl Validate for CheckSettings {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.api.endpoint {
            validate_url("api.endpoint", endpoint)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CheckSettings {
    fn api_endpoint(&self) -> Option<&str> {
        self.api.endpoint.as_deref()
    }

    fn api_key(&self) -> Option<&str> {
        self.api.api_key.as_deref()
    }

    fn domain_extraction(&self) -> DomainExtraction {
        self.domain_extraction
    }

    fn mail_record_policy(&self) -> MailRecordPolicy {
        self.mail_record_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::ChecksConfig;

    #[test]
    fn test_defaults() {
        let settings = CheckSettings::default();
        assert_eq!(settings.api_endpoint(), Some(DEFAULT_API_ENDPOINT));
        assert_eq!(settings.api_key(), None);
        assert_eq!(settings.domain_extraction(), DomainExtraction::Segment);
        assert_eq!(settings.mail_record_policy(), MailRecordPolicy::AnyResolvable);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let mut settings = CheckSettings::default();
        settings.apply_file(TomlConfig {
            api: ApiConfig {
                endpoint: None,
                api_key: Some("file-key".to_string()),
            },
            checks: ChecksConfig {
                domain_extraction: Some(DomainExtraction::Remainder),
                require_mx: Some(true),
            },
        });

        assert_eq!(settings.api_endpoint(), Some(DEFAULT_API_ENDPOINT));
        assert_eq!(settings.api_key(), Some("file-key"));
        assert_eq!(settings.domain_extraction(), DomainExtraction::Remainder);
        assert_eq!(settings.mail_record_policy(), MailRecordPolicy::RequireMx);
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let mut settings = CheckSettings::default();
        settings.api.endpoint = Some("ftp://api.example.com".to_string());
        assert!(settings.validate().is_err());
    }
}
