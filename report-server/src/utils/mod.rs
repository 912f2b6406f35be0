//! Utility module - common helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error types (from `shared::error`)
//! - [`logger`] - tracing setup
//! - [`time`] - business-timezone date helpers

pub mod logger;
pub mod time;

// Re-export error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
