//! # BNPL Gateway
//!
//! HTTP gateway that initiates Payflex buy-now-pay-later checkout sessions.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PAYFLEX_CLIENT_ID=...
//! export PAYFLEX_CLIENT_SECRET=...
//! export PAYFLEX_AUDIENCE=https://api.payflex.co.za/
//!
//! # Run the server
//! bnpl-gateway
//! ```

use bnpl_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("BNPL gateway starting on http://{}", addr);

    if !is_prod {
        info!("Checkout: POST http://{}/create-payflex-checkout", addr);
        info!("Health:   GET  http://{}/health", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
