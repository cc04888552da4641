//! # BNPL Provider Trait
//!
//! Core trait for buy-now-pay-later providers. A provider is two
//! operations, always run in order within a single request:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                BnplProvider (trait)             │
//! │  ├── authenticate()   → BearerToken             │
//! │  ├── create_checkout() → CheckoutResult         │
//! │  └── provider_name()                            │
//! └─────────────────────────────────────────────────┘
//!                        ▲
//!                        │
//!               ┌────────┴────────┐
//!               │ PayflexProvider │
//!               └─────────────────┘
//! ```
//!
//! `create_checkout` must never be invoked without a token obtained from a
//! successful `authenticate` in the same request. Tokens are not cached or
//! reused across requests.

use crate::error::BnplResult;
use crate::order::{CheckoutOrder, CheckoutResult};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Opaque short-lived credential for authenticated provider calls.
///
/// The token's format and expiry are not inspected. The value is excluded
/// from `Debug` output so it cannot leak through logs.
#[derive(Clone)]
pub struct BearerToken {
    value: String,
}

impl BearerToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The raw token value, for the Authorization header
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Core trait for BNPL provider implementations.
#[async_trait]
pub trait BnplProvider: Send + Sync {
    /// Exchange static application credentials for a short-lived bearer
    /// token. One outbound call, no retry, no caching.
    async fn authenticate(&self) -> BnplResult<BearerToken>;

    /// Create a checkout session using a token from `authenticate`.
    /// One outbound call; the token is not refreshed on failure.
    async fn create_checkout(
        &self,
        token: &BearerToken,
        order: &CheckoutOrder,
    ) -> BnplResult<CheckoutResult>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedBnplProvider = Arc<dyn BnplProvider>;
