//! Back-office report server
//!
//! Loads a read-only snapshot of one business day (orders → checks →
//! items, payments, access logs) and derives the daily financial reports:
//! department/daypart/revenue-center sales, exceptions (comps/voids),
//! payment reconciliation, tax summary, and employee activity analytics.
//!
//! # Module structure
//!
//! ```text
//! report-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, migrations, repositories (snapshot loader)
//! ├── money/         # fixed-point monetary arithmetic and formatting
//! ├── reports/       # calculators + assembler
//! └── utils/         # logging, time helpers, error re-exports
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod money;
pub mod reports;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
