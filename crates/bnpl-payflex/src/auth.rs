//! # Payflex Token Exchange
//!
//! OAuth2 client-credentials exchange against the Payflex auth endpoint.
//! One outbound call per inbound request; tokens are never cached, decoded,
//! or inspected for expiry.

use crate::config::PayflexConfig;
use bnpl_core::{BearerToken, BnplError, BnplResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Fixed grant type for the credential exchange
const GRANT_TYPE: &str = "client_credentials";

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
    grant_type: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Exchange application credentials for a short-lived bearer token.
///
/// Every failure (network error, timeout, non-2xx status, malformed body,
/// missing token field) collapses to `BnplError::AuthenticationFailed`;
/// the concrete cause is logged here and goes no further.
pub async fn exchange_credentials(
    client: &Client,
    config: &PayflexConfig,
) -> BnplResult<BearerToken> {
    config.validate()?;

    let payload = TokenRequest {
        client_id: &config.client_id,
        client_secret: &config.client_secret,
        audience: &config.audience,
        grant_type: GRANT_TYPE,
    };

    debug!("Requesting Payflex bearer token from {}", config.auth_url);

    let response = client
        .post(&config.auth_url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            error!("Payflex token request failed: {}", e);
            BnplError::AuthenticationFailed
        })?;

    let status = response.status();
    if !status.is_success() {
        error!("Payflex token endpoint returned status={}", status);
        return Err(BnplError::AuthenticationFailed);
    }

    let body: TokenResponse = response.json().await.map_err(|e| {
        error!("Failed to parse Payflex token response: {}", e);
        BnplError::AuthenticationFailed
    })?;

    match body.access_token {
        Some(token) if !token.is_empty() => Ok(BearerToken::new(token)),
        _ => {
            error!("Payflex token response missing access_token");
            Err(BnplError::AuthenticationFailed)
        }
    }
}
