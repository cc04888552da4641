//! # bnpl-payflex
//!
//! Payflex buy-now-pay-later provider for the bnpl-checkout gateway.
//!
//! Payflex uses an OAuth2 client-credentials exchange: every checkout
//! request first trades the application's static credentials for a
//! short-lived bearer token, then creates the checkout session with it.
//! Tokens are deliberately not cached, so the two calls always happen
//! back-to-back within one request.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bnpl_payflex::PayflexProvider;
//! use bnpl_core::{BnplProvider, CheckoutOrder};
//!
//! // Create provider from environment
//! let provider = PayflexProvider::from_env()?;
//!
//! // Two-step flow: authenticate, then create the session
//! let token = provider.authenticate().await?;
//! let result = provider.create_checkout(&token, &order).await?;
//!
//! // Redirect user to result.redirect_url
//! ```

pub mod auth;
pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::PayflexProvider;
pub use config::PayflexConfig;
