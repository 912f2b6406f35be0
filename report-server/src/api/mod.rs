//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`reports`] - daily summary and activity reports
//!
//! Authentication and tenant resolution live in an external gateway; the
//! resolved business arrives as a request extension (see [`context`]).

pub mod context;
pub mod health;
pub mod reports;

use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    health::router().merge(reports::router())
}

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
