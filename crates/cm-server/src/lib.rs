//! # cm-server
//!
//! Axum service exposing the commodity money valuation models over HTTP,
//! both as typed endpoints and through the generic tool registry.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use routes::router;
pub use state::AppState;
