//! # Order Types
//!
//! Checkout order and result types for the bnpl-checkout gateway.
//! Nothing here outlives the request that created it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payflex settles in South African Rand only.
pub const CURRENCY_ZAR: &str = "ZAR";

/// Customer details forwarded to the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Customer email (required; format is passed through unvalidated)
    pub email: String,

    /// First name (optional, forwarded as-is)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name (optional, forwarded as-is)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Redirect URLs the provider sends the payer to after checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectUrls {
    /// URL to return to after successful payment
    pub return_url: String,
    /// URL to return to if the customer cancels
    pub cancel_url: String,
}

impl RedirectUrls {
    pub fn new(return_url: impl Into<String>, cancel_url: impl Into<String>) -> Self {
        Self {
            return_url: return_url.into(),
            cancel_url: cancel_url.into(),
        }
    }
}

/// An order to be checked out with the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutOrder {
    /// Amount in major units (e.g. 250.00)
    pub amount: f64,

    /// Settlement currency, fixed to ZAR
    pub currency: String,

    /// Merchant reference (caller-supplied or generated)
    pub merchant_reference: String,

    /// Customer block
    pub customer: Customer,

    /// Post-checkout redirect URLs
    pub redirect: RedirectUrls,
}

impl CheckoutOrder {
    /// Create a new order with a generated merchant reference
    pub fn new(amount: f64, email: impl Into<String>, redirect: RedirectUrls) -> Self {
        Self {
            amount,
            currency: CURRENCY_ZAR.to_string(),
            merchant_reference: Uuid::new_v4().to_string(),
            customer: Customer {
                email: email.into(),
                first_name: None,
                last_name: None,
            },
            redirect,
        }
    }

    /// Set customer names
    pub fn with_customer_name(
        mut self,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        self.customer.first_name = first_name;
        self.customer.last_name = last_name;
        self
    }

    /// Override the generated merchant reference
    pub fn with_merchant_reference(mut self, reference: impl Into<String>) -> Self {
        self.merchant_reference = reference.into();
        self
    }
}

/// Normalized result of a created checkout session.
///
/// Produced only after a successful token exchange in the same request;
/// carries no server-side state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResult {
    /// Session status, always "created" for a fresh session
    pub status: String,

    /// Provider's session identifier
    pub provider_reference: String,

    /// URL the payer visits to complete payment
    pub redirect_url: String,
}

impl CheckoutResult {
    /// Create a result for a freshly created session
    pub fn created(
        provider_reference: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            status: "created".to_string(),
            provider_reference: provider_reference.into(),
            redirect_url: redirect_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect() -> RedirectUrls {
        RedirectUrls::new("https://shop.example/success", "https://shop.example/cancel")
    }

    #[test]
    fn test_order_defaults() {
        let order = CheckoutOrder::new(100.0, "a@b.com", redirect());

        assert_eq!(order.currency, CURRENCY_ZAR);
        assert_eq!(order.customer.email, "a@b.com");
        assert!(order.customer.first_name.is_none());
        // Generated reference is a uuid, not a fixed placeholder
        assert_eq!(order.merchant_reference.len(), 36);
    }

    #[test]
    fn test_order_builders() {
        let order = CheckoutOrder::new(100.0, "a@b.com", redirect())
            .with_customer_name(Some("Jane".into()), Some("Doe".into()))
            .with_merchant_reference("ORDER-42");

        assert_eq!(order.customer.first_name.as_deref(), Some("Jane"));
        assert_eq!(order.customer.last_name.as_deref(), Some("Doe"));
        assert_eq!(order.merchant_reference, "ORDER-42");
    }

    #[test]
    fn test_generated_references_are_unique() {
        let a = CheckoutOrder::new(1.0, "a@b.com", redirect());
        let b = CheckoutOrder::new(1.0, "a@b.com", redirect());
        assert_ne!(a.merchant_reference, b.merchant_reference);
    }

    #[test]
    fn test_checkout_result_created() {
        let result = CheckoutResult::created("PF-999", "https://pay.example/999");

        assert_eq!(result.status, "created");
        assert_eq!(result.provider_reference, "PF-999");
        assert_eq!(result.redirect_url, "https://pay.example/999");
    }

    #[test]
    fn test_result_serializes_expected_keys() {
        let result = CheckoutResult::created("X", "Y");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "created");
        assert_eq!(json["provider_reference"], "X");
        assert_eq!(json["redirect_url"], "Y");
    }
}
