//! # BNPL Error Types
//!
//! Typed error handling for the bnpl-checkout gateway.
//! All provider operations return `Result<T, BnplError>`.

use thiserror::Error;

/// Core error type for all checkout operations.
///
/// Causes of the two provider failures (non-2xx status, network error,
/// timeout, malformed body) are collapsed into the coarse kinds here before
/// they reach a caller; the concrete cause is logged at the collapse point
/// and never leaves the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BnplError {
    /// Configuration errors (missing env vars, empty credentials)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid inbound request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Credential exchange with the provider failed
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Checkout session creation with the provider failed
    #[error("Checkout creation failed")]
    CheckoutCreationFailed,
}

impl BnplError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            BnplError::Configuration(_) => 500,
            BnplError::InvalidRequest(_) => 400,
            BnplError::AuthenticationFailed => 500,
            BnplError::CheckoutCreationFailed => 502,
        }
    }
}

/// Result type alias for checkout operations
pub type BnplResult<T> = Result<T, BnplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BnplError::InvalidRequest("test".into()).status_code(), 400);
        assert_eq!(BnplError::AuthenticationFailed.status_code(), 500);
        assert_eq!(BnplError::CheckoutCreationFailed.status_code(), 502);
        assert_eq!(BnplError::Configuration("x".into()).status_code(), 500);
    }

    #[test]
    fn test_display_carries_no_internal_detail() {
        assert_eq!(BnplError::AuthenticationFailed.to_string(), "Authentication failed");
        assert_eq!(
            BnplError::CheckoutCreationFailed.to_string(),
            "Checkout creation failed"
        );
    }
}
