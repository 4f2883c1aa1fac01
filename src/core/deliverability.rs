use crate::domain::model::CheckOutcome;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_resolved_placeholder,
    validate_url,
};
use reqwest::Client;
use serde_json::Value;

/// Asks the third-party verification API whether an address accepts mail.
pub struct DeliverabilityChecker<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> DeliverabilityChecker<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn check(&self, email: &str) -> CheckOutcome {
        let (endpoint, api_key) = match self.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::warn!("Skipping deliverability check: {}", e);
                return CheckOutcome::NotAttempted;
            }
        };

        match self.query(endpoint, api_key, email).await {
            Ok(body) => interpret_response(&body),
            Err(e) => {
                tracing::warn!("Deliverability check failed: {}", e);
                CheckOutcome::TransportError(e.to_string())
            }
        }
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        let endpoint = self.config.api_endpoint();
        let endpoint = *validate_required_field("api.endpoint", &endpoint)?;
        validate_url("api.endpoint", endpoint)?;

        let api_key = self.config.api_key();
        let api_key = *validate_required_field("api.api_key", &api_key)?;
        validate_non_empty_string("api.api_key", api_key)?;
        validate_resolved_placeholder("api.api_key", api_key)?;

        Ok((endpoint, api_key))
    }

    async fn query(&self, endpoint: &str, api_key: &str, email: &str) -> Result<Value> {
        tracing::debug!("Making API request to: {}", endpoint);
        let response = self
            .client
            .get(endpoint)
            .query(&[("apikey", api_key), ("email", email)])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(CheckError::api_response(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Positive only for `"status": "valid"` together with `"deliverable": true`.
pub fn interpret_response(body: &Value) -> CheckOutcome {
    let Some(fields) = body.as_object() else {
        return CheckOutcome::TransportError("response body is not a JSON object".to_string());
    };

    let status_valid = fields.get("status").and_then(Value::as_str) == Some("valid");
    let deliverable = fields.get("deliverable").and_then(Value::as_bool) == Some(true);

    CheckOutcome::from_bool(status_valid && deliverable)
}
