//! # bnpl-api
//!
//! HTTP API layer for the bnpl-checkout gateway.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The checkout initiation endpoint
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/create-payflex-checkout` | Initiate a Payflex checkout session |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
