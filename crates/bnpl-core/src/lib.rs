//! # bnpl-core
//!
//! Core types and traits for the bnpl-checkout gateway.
//!
//! This crate provides:
//! - `BnplProvider` trait for implementing buy-now-pay-later providers
//! - `CheckoutOrder` and `CheckoutResult` for the checkout flow
//! - `BearerToken` for per-request provider credentials
//! - `BnplError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use bnpl_core::{BnplProvider, CheckoutOrder, RedirectUrls};
//!
//! // Build an order from the inbound request
//! let order = CheckoutOrder::new(250.0, "jane@example.com", redirect.clone())
//!     .with_customer_name(Some("Jane".into()), Some("Doe".into()));
//!
//! // Authenticate, then create the session with the fresh token
//! let token = provider.authenticate().await?;
//! let result = provider.create_checkout(&token, &order).await?;
//!
//! // Redirect user to result.redirect_url
//! ```

pub mod error;
pub mod order;
pub mod provider;

// Re-exports for convenience
pub use error::{BnplError, BnplResult};
pub use order::{CheckoutOrder, CheckoutResult, Customer, RedirectUrls, CURRENCY_ZAR};
pub use provider::{BearerToken, BnplProvider, BoxedBnplProvider};
