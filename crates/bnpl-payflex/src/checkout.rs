//! # Payflex Checkout Sessions
//!
//! Creation of Payflex checkout sessions. This is the second half of the
//! per-request flow: a token from `auth::exchange_credentials` authorizes a
//! single `POST <api_base>/checkout` describing the order.

use crate::auth;
use crate::config::PayflexConfig;
use async_trait::async_trait;
use bnpl_core::{
    BearerToken, BnplError, BnplProvider, BnplResult, CheckoutOrder, CheckoutResult,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Payflex BNPL provider
///
/// Holds the static application configuration and a shared HTTP client.
/// Stateless across requests: each checkout performs its own token
/// exchange followed by one session-creation call.
pub struct PayflexProvider {
    config: PayflexConfig,
    client: Client,
}

impl PayflexProvider {
    /// Create a new Payflex provider
    pub fn new(config: PayflexConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> BnplResult<Self> {
        let config = PayflexConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// The provider's configuration (redirect URLs live here)
    pub fn config(&self) -> &PayflexConfig {
        &self.config
    }

    fn build_payload<'a>(order: &'a CheckoutOrder) -> CheckoutSessionPayload<'a> {
        CheckoutSessionPayload {
            amount: order.amount,
            currency: &order.currency,
            merchant_reference: &order.merchant_reference,
            customer: CustomerPayload {
                email: &order.customer.email,
                first_name: order.customer.first_name.as_deref(),
                surname: order.customer.last_name.as_deref(),
            },
            redirect: RedirectPayload {
                return_url: &order.redirect.return_url,
                cancel_url: &order.redirect.cancel_url,
            },
        }
    }
}

#[async_trait]
impl BnplProvider for PayflexProvider {
    #[instrument(skip(self))]
    async fn authenticate(&self) -> BnplResult<BearerToken> {
        auth::exchange_credentials(&self.client, &self.config).await
    }

    #[instrument(skip(self, token, order), fields(merchant_reference = %order.merchant_reference))]
    async fn create_checkout(
        &self,
        token: &BearerToken,
        order: &CheckoutOrder,
    ) -> BnplResult<CheckoutResult> {
        let payload = Self::build_payload(order);
        let url = format!("{}/checkout", self.config.api_base_url);

        debug!("Creating Payflex checkout session: amount={}", order.amount);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Payflex checkout request failed: {}", e);
                BnplError::CheckoutCreationFailed
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Payflex checkout response: {}", e);
            BnplError::CheckoutCreationFailed
        })?;

        if !status.is_success() {
            error!("Payflex checkout API error: status={}, body={}", status, body);
            return Err(BnplError::CheckoutCreationFailed);
        }

        let session: PayflexCheckoutResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Payflex checkout response: {}", e);
            BnplError::CheckoutCreationFailed
        })?;

        info!("Created Payflex checkout session: id={}", session.id);

        Ok(CheckoutResult::created(session.id, session.redirect_url))
    }

    fn provider_name(&self) -> &'static str {
        "payflex"
    }
}

// =============================================================================
// Payflex API Types
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutSessionPayload<'a> {
    amount: f64,
    currency: &'a str,
    merchant_reference: &'a str,
    customer: CustomerPayload<'a>,
    redirect: RedirectPayload<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomerPayload<'a> {
    email: &'a str,
    // Absent names are forwarded as null, the provider's "no value"
    first_name: Option<&'a str>,
    surname: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RedirectPayload<'a> {
    return_url: &'a str,
    cancel_url: &'a str,
}

#[derive(Deserialize)]
struct PayflexCheckoutResponse {
    id: String,
    #[serde(rename = "redirectUrl")]
    redirect_url: String,
}
