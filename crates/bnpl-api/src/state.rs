//! # Application State
//!
//! Shared state for the Axum application.
//! Credentials and redirect URLs are read-only configuration; no mutable
//! state is shared between requests.

use bnpl_core::{BoxedBnplProvider, RedirectUrls};
use bnpl_payflex::PayflexProvider;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// BNPL provider (Payflex in production)
    pub provider: BoxedBnplProvider,
    /// Redirect URLs attached to every checkout order
    pub redirect: RedirectUrls,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by the Payflex provider
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let provider = PayflexProvider::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Payflex: {}", e))?;
        let redirect = provider.config().redirect_urls();

        Ok(Self {
            provider: Arc::new(provider),
            redirect,
            config,
        })
    }

    /// Create state with an explicit provider (for testing)
    pub fn with_provider(provider: BoxedBnplProvider, redirect: RedirectUrls) -> Self {
        Self {
            provider,
            redirect,
            config: AppConfig::from_env(),
        }
    }
}
