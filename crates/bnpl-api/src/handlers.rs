//! # Request Handlers
//!
//! Axum request handlers for the checkout gateway.
//!
//! The checkout handler is a three-state sequence per request:
//! authenticate with Payflex, then create the session with the fresh
//! token, then respond. A failure at either step is terminal — there is
//! no retry and no partial response, and session creation never starts
//! unless authentication succeeded.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use bnpl_core::CheckoutOrder;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Inbound checkout request
#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Amount in major units; required, must be positive
    #[serde(default)]
    pub amount: Option<f64>,
    /// Customer email; required, format not validated
    #[serde(default)]
    pub email: Option<String>,
    /// Customer first name (optional, forwarded to the provider)
    #[serde(default)]
    pub first_name: Option<String>,
    /// Customer last name (optional, forwarded to the provider)
    #[serde(default)]
    pub last_name: Option<String>,
    /// Merchant reference (optional, generated when absent)
    #[serde(default)]
    pub merchant_reference: Option<String>,
}

/// Successful checkout response
#[derive(Debug, Serialize)]
pub struct CreateCheckoutResponse {
    /// Always "created"
    pub status: String,
    /// Payflex session identifier
    pub payflex_id: String,
    /// URL the payer visits to complete payment
    pub redirect_url: String,
}

/// Error response. Carries a single message and nothing else: internal
/// causes stay in the logs.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> HandlerError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "bnpl-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Initiate a Payflex checkout session
#[instrument(skip(state, request))]
pub async fn create_payflex_checkout(
    State(state): State<AppState>,
    Json(request): Json<CreateCheckoutRequest>,
) -> Result<Json<CreateCheckoutResponse>, HandlerError> {
    // Fail fast on an unusable request before any outbound call is made
    let amount = match request.amount {
        Some(a) if a.is_finite() && a > 0.0 => a,
        Some(_) => return Err(bad_request("'amount' must be a positive number")),
        None => return Err(bad_request("Missing 'amount'")),
    };
    let email = match request.email {
        Some(ref e) if !e.is_empty() => e.clone(),
        _ => return Err(bad_request("Missing 'email'")),
    };

    let mut order = CheckoutOrder::new(amount, email, state.redirect.clone())
        .with_customer_name(request.first_name.clone(), request.last_name.clone());
    if let Some(ref reference) = request.merchant_reference {
        order = order.with_merchant_reference(reference);
    }

    // Step 1: credential exchange. Session creation never starts if this fails.
    let token = state.provider.authenticate().await.map_err(|e| {
        error!("Payflex authentication failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to authenticate with Payflex")),
        )
    })?;

    // Step 2: create the checkout session with the fresh token.
    // The token is not refreshed or retried on failure.
    let result = state
        .provider
        .create_checkout(&token, &order)
        .await
        .map_err(|e| {
            error!("Payflex checkout creation failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new("Failed to create Payflex checkout")),
            )
        })?;

    info!(
        "Created Payflex checkout: reference={}, merchant_reference={}",
        result.provider_reference, order.merchant_reference
    );

    Ok(Json(CreateCheckoutResponse {
        status: result.status,
        payflex_id: result.provider_reference,
        redirect_url: result.redirect_url,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use crate::state::AppState;
    use async_trait::async_trait;
    use axum_test::TestServer;
    use bnpl_core::{
        BearerToken, BnplError, BnplProvider, BnplResult, CheckoutResult, RedirectUrls,
    };
    use std::sync::{Arc, Mutex};

    /// Mock provider that records the call sequence
    struct RecordingProvider {
        calls: Mutex<Vec<&'static str>>,
        fail_auth: bool,
        fail_checkout: bool,
    }

    impl RecordingProvider {
        fn new(fail_auth: bool, fail_checkout: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail_auth,
                fail_checkout,
            })
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BnplProvider for RecordingProvider {
        async fn authenticate(&self) -> BnplResult<BearerToken> {
            self.calls.lock().unwrap().push("authenticate");
            if self.fail_auth {
                return Err(BnplError::AuthenticationFailed);
            }
            Ok(BearerToken::new("tok_test"))
        }

        async fn create_checkout(
            &self,
            token: &BearerToken,
            _order: &bnpl_core::CheckoutOrder,
        ) -> BnplResult<CheckoutResult> {
            assert_eq!(token.as_str(), "tok_test");
            self.calls.lock().unwrap().push("create_checkout");
            if self.fail_checkout {
                return Err(BnplError::CheckoutCreationFailed);
            }
            Ok(CheckoutResult::created("PF-999", "https://pay.example/999"))
        }

        fn provider_name(&self) -> &'static str {
            "recording"
        }
    }

    fn server_with(provider: Arc<RecordingProvider>) -> TestServer {
        let state = AppState::with_provider(
            provider,
            RedirectUrls::new(
                "https://shop.example/success",
                "https://shop.example/cancel",
            ),
        );
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_happy_path_response_body() {
        let provider = RecordingProvider::new(false, false);
        let server = server_with(provider.clone());

        let response = server
            .post("/create-payflex-checkout")
            .json(&serde_json::json!({ "amount": 250.00, "email": "jane@example.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(
            body,
            serde_json::json!({
                "status": "created",
                "payflex_id": "PF-999",
                "redirect_url": "https://pay.example/999"
            })
        );
    }

    #[tokio::test]
    async fn test_checkout_never_starts_before_successful_auth() {
        let provider = RecordingProvider::new(true, false);
        let server = server_with(provider.clone());

        let response = server
            .post("/create-payflex-checkout")
            .json(&serde_json::json!({ "amount": 100, "email": "a@b.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(
            body,
            serde_json::json!({ "error": "Failed to authenticate with Payflex" })
        );
        // Session creation was never invoked
        assert_eq!(provider.calls(), vec!["authenticate"]);
    }

    #[tokio::test]
    async fn test_calls_run_in_strict_sequence() {
        let provider = RecordingProvider::new(false, false);
        let server = server_with(provider.clone());

        server
            .post("/create-payflex-checkout")
            .json(&serde_json::json!({ "amount": 100, "email": "a@b.com" }))
            .await;

        assert_eq!(provider.calls(), vec!["authenticate", "create_checkout"]);
    }

    #[tokio::test]
    async fn test_checkout_failure_is_distinct_server_error() {
        let provider = RecordingProvider::new(false, true);
        let server = server_with(provider.clone());

        let response = server
            .post("/create-payflex-checkout")
            .json(&serde_json::json!({ "amount": 100, "email": "a@b.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = response.json();
        assert_ne!(body["error"], "Failed to authenticate with Payflex");
        assert!(body.get("redirect_url").is_none());
    }

    #[tokio::test]
    async fn test_missing_amount_fails_fast() {
        let provider = RecordingProvider::new(false, false);
        let server = server_with(provider.clone());

        let response = server
            .post("/create-payflex-checkout")
            .json(&serde_json::json!({ "email": "a@b.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        // No outbound call was attempted
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_positive_amount_fails_fast() {
        let provider = RecordingProvider::new(false, false);
        let server = server_with(provider.clone());

        let response = server
            .post("/create-payflex-checkout")
            .json(&serde_json::json!({ "amount": -5, "email": "a@b.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_email_fails_fast() {
        let provider = RecordingProvider::new(false, false);
        let server = server_with(provider.clone());

        let response = server
            .post("/create-payflex-checkout")
            .json(&serde_json::json!({ "amount": 100 }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_health() {
        let provider = RecordingProvider::new(false, false);
        let server = server_with(provider);

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
    }
}
