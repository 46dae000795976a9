//! CRM Config

use clap::Args;

use crate::{
    config::ConfigError,
    crm::{CrmConfig, Secret},
};

/// CRM connection settings. Only required when a CRM-backed catalog or
/// remote order submission is selected.
#[derive(Debug, Clone, Args)]
pub struct CrmArgs {
    /// CRM instance base URL
    #[arg(long = "crm-instance-url", env = "CRM_INSTANCE_URL")]
    pub instance_url: Option<String>,

    /// OAuth token endpoint; defaults to the instance's token path
    #[arg(long = "crm-token-url", env = "CRM_TOKEN_URL")]
    pub token_url: Option<String>,

    /// OAuth client id
    #[arg(long = "crm-client-id", env = "CRM_CLIENT_ID")]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[arg(long = "crm-client-secret", env = "CRM_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<Secret>,

    /// Account orders are placed for
    #[arg(long = "crm-account-id", env = "CRM_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// Order creation endpoint path
    #[arg(
        long = "crm-order-path",
        env = "CRM_ORDER_PATH",
        default_value = "services/apexrest/portal/orders"
    )]
    pub order_path: String,

    /// REST API version used for product queries
    #[arg(long = "crm-api-version", env = "CRM_API_VERSION", default_value = "v62.0")]
    pub api_version: String,
}

impl CrmArgs {
    /// Build a client configuration, checking required settings are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCrmSetting`] naming the first missing
    /// setting.
    pub fn to_config(&self) -> Result<CrmConfig, ConfigError> {
        fn required(value: Option<&String>, name: &'static str) -> Result<String, ConfigError> {
            value
                .filter(|value| !value.trim().is_empty())
                .cloned()
                .ok_or(ConfigError::MissingCrmSetting(name))
        }

        let client_secret = self
            .client_secret
            .clone()
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingCrmSetting("CRM_CLIENT_SECRET"))?;

        Ok(CrmConfig {
            instance_url: required(self.instance_url.as_ref(), "CRM_INSTANCE_URL")?,
            token_url: self.token_url.clone(),
            client_id: required(self.client_id.as_ref(), "CRM_CLIENT_ID")?,
            client_secret,
            account_id: required(self.account_id.as_ref(), "CRM_ACCOUNT_ID")?,
            order_path: self.order_path.clone(),
            api_version: self.api_version.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn args() -> CrmArgs {
        CrmArgs {
            instance_url: Some("https://crm.example.com".to_string()),
            token_url: None,
            client_id: Some("client".to_string()),
            client_secret: Some(Secret::new("secret")),
            account_id: Some("001ACC".to_string()),
            order_path: "services/apexrest/portal/orders".to_string(),
            api_version: "v62.0".to_string(),
        }
    }

    #[test]
    fn complete_args_build_a_config() -> TestResult {
        let config = args().to_config()?;

        assert_eq!(config.account_id, "001ACC");
        assert_eq!(config.client_secret.expose(), "secret");

        Ok(())
    }

    #[test]
    fn missing_secret_is_reported_by_name() {
        let mut args = args();
        args.client_secret = None;

        let result = args.to_config();

        assert!(matches!(
            result,
            Err(ConfigError::MissingCrmSetting("CRM_CLIENT_SECRET"))
        ));
    }

    #[test]
    fn blank_account_counts_as_missing() {
        let mut args = args();
        args.account_id = Some("  ".to_string());

        assert!(matches!(
            args.to_config(),
            Err(ConfigError::MissingCrmSetting("CRM_ACCOUNT_ID"))
        ));
    }
}
