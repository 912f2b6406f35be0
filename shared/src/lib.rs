//! Shared types for the back-office reporting stack
//!
//! Read-only data projections consumed by the report calculators, the
//! report payload types returned over the API, and the unified error
//! system shared between server and clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
