use crate::domain::model::DomainExtraction;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// Verification API settings. Both fields may be absent; the deliverability
/// check is skipped until they are supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksConfig {
    pub domain_extraction: Option<DomainExtraction>,
    pub require_mx: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ZEROBOUNCE_API_KEY})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.api.endpoint {
            validate_url("api.endpoint", endpoint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
endpoint = "https://api.zerobounce.net/v2/validate"
api_key = "abc123"

[checks]
domain_extraction = "remainder"
require_mx = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.api.endpoint.as_deref(),
            Some("https://api.zerobounce.net/v2/validate")
        );
        assert_eq!(config.api.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.checks.domain_extraction, Some(DomainExtraction::Remainder));
        assert_eq!(config.checks.require_mx, Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());

        let config = TomlConfig::from_toml_str("[api]\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.api.endpoint, None);
        assert_eq!(config.checks, ChecksConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MAIL_PROBE_TEST_API_KEY", "from-env");

        let config = TomlConfig::from_toml_str(
            "[api]\napi_key = \"${MAIL_PROBE_TEST_API_KEY}\"\n",
        )
        .unwrap();
        assert_eq!(config.api.api_key.as_deref(), Some("from-env"));

        std::env::remove_var("MAIL_PROBE_TEST_API_KEY");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            "[api]\napi_key = \"${MAIL_PROBE_TEST_DEFINITELY_UNSET}\"\n",
        )
        .unwrap();
        assert_eq!(
            config.api.api_key.as_deref(),
            Some("${MAIL_PROBE_TEST_DEFINITELY_UNSET}")
        );
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config = TomlConfig::from_toml_str("[api]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_extraction_mode_is_rejected() {
        let result = TomlConfig::from_toml_str("[checks]\ndomain_extraction = \"last-at\"\n");
        assert!(matches!(result, Err(CheckError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nendpoint = \"https://api.example.com/validate\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.api.endpoint.as_deref(),
            Some("https://api.example.com/validate")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/nonexistent/mail-probe.toml");
        assert!(matches!(result, Err(CheckError::IoError(_))));
    }
}
