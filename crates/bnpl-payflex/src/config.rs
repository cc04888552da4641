//! # Payflex Configuration
//!
//! Configuration management for the Payflex integration.
//! All secrets are loaded from environment variables; nothing is hardcoded.

use bnpl_core::{BnplError, RedirectUrls};
use std::env;

/// Payflex API configuration
#[derive(Debug, Clone)]
pub struct PayflexConfig {
    /// Application client id
    pub client_id: String,

    /// Application client secret
    pub client_secret: String,

    /// API audience requested during the token exchange
    pub audience: String,

    /// OAuth2 token endpoint
    pub auth_url: String,

    /// API base URL (overridable for testing/mocking)
    pub api_base_url: String,

    /// URL the payer returns to after successful payment
    pub return_url: String,

    /// URL the payer returns to after cancelling
    pub cancel_url: String,
}

impl PayflexConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYFLEX_CLIENT_ID`
    /// - `PAYFLEX_CLIENT_SECRET`
    /// - `PAYFLEX_AUDIENCE`
    ///
    /// Optional (sandbox defaults):
    /// - `PAYFLEX_AUTH_URL`
    /// - `PAYFLEX_API_BASE`
    /// - `PAYFLEX_RETURN_URL`
    /// - `PAYFLEX_CANCEL_URL`
    pub fn from_env() -> Result<Self, BnplError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let client_id = env::var("PAYFLEX_CLIENT_ID")
            .map_err(|_| BnplError::Configuration("PAYFLEX_CLIENT_ID not set".to_string()))?;

        let client_secret = env::var("PAYFLEX_CLIENT_SECRET")
            .map_err(|_| BnplError::Configuration("PAYFLEX_CLIENT_SECRET not set".to_string()))?;

        let audience = env::var("PAYFLEX_AUDIENCE")
            .map_err(|_| BnplError::Configuration("PAYFLEX_AUDIENCE not set".to_string()))?;

        let config = Self {
            client_id,
            client_secret,
            audience,
            auth_url: env::var("PAYFLEX_AUTH_URL")
                .unwrap_or_else(|_| "https://payflex.eu.auth0.com/oauth/token".to_string()),
            api_base_url: env::var("PAYFLEX_API_BASE")
                .unwrap_or_else(|_| "https://api.payflex.co.za/v1".to_string()),
            return_url: env::var("PAYFLEX_RETURN_URL")
                .unwrap_or_else(|_| "http://localhost:8080/checkout/success".to_string()),
            cancel_url: env::var("PAYFLEX_CANCEL_URL")
                .unwrap_or_else(|_| "http://localhost:8080/checkout/cancel".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            audience: audience.into(),
            auth_url: "https://payflex.eu.auth0.com/oauth/token".to_string(),
            api_base_url: "https://api.payflex.co.za/v1".to_string(),
            return_url: "http://localhost:8080/checkout/success".to_string(),
            cancel_url: "http://localhost:8080/checkout/cancel".to_string(),
        }
    }

    /// All credential fields must be non-empty before any call is attempted
    pub fn validate(&self) -> Result<(), BnplError> {
        if self.client_id.is_empty() {
            return Err(BnplError::Configuration(
                "PAYFLEX_CLIENT_ID must not be empty".to_string(),
            ));
        }
        if self.client_secret.is_empty() {
            return Err(BnplError::Configuration(
                "PAYFLEX_CLIENT_SECRET must not be empty".to_string(),
            ));
        }
        if self.audience.is_empty() {
            return Err(BnplError::Configuration(
                "PAYFLEX_AUDIENCE must not be empty".to_string(),
            ));
        }
        if self.auth_url.is_empty() {
            return Err(BnplError::Configuration(
                "PAYFLEX_AUTH_URL must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Redirect URLs carried into each checkout order
    pub fn redirect_urls(&self) -> RedirectUrls {
        RedirectUrls::new(&self.return_url, &self.cancel_url)
    }

    /// Builder: set custom auth endpoint (for testing)
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_validates() {
        let config = PayflexConfig::new("cid_123", "secret_456", "https://api.payflex.co.za/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let config = PayflexConfig::new("", "secret", "aud");
        assert!(matches!(
            config.validate(),
            Err(BnplError::Configuration(_))
        ));

        let config = PayflexConfig::new("cid", "", "aud");
        assert!(config.validate().is_err());

        let config = PayflexConfig::new("cid", "secret", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders_override_endpoints() {
        let config = PayflexConfig::new("cid", "secret", "aud")
            .with_auth_url("http://127.0.0.1:9999/oauth/token")
            .with_api_base_url("http://127.0.0.1:9999/v1");

        assert_eq!(config.auth_url, "http://127.0.0.1:9999/oauth/token");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999/v1");
    }

    #[test]
    fn test_redirect_urls() {
        let config = PayflexConfig::new("cid", "secret", "aud");
        let redirect = config.redirect_urls();

        assert_eq!(redirect.return_url, "http://localhost:8080/checkout/success");
        assert_eq!(redirect.cancel_url, "http://localhost:8080/checkout/cancel");
    }
}
